/// Lazy "years ago" sequence: 1, 2, 3, ...
///
/// Each call starts over; the consumer decides when to stop pulling.
pub(crate) fn years_ago() -> impl Iterator<Item = u32> {
    1u32..
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_one_and_counts_up() {
        let first: Vec<u32> = years_ago().take(5).collect();
        assert_eq!(first, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn restarts_on_each_call() {
        let mut a = years_ago();
        a.next();
        a.next();
        assert_eq!(years_ago().next(), Some(1));
        assert_eq!(a.next(), Some(3));
    }
}
