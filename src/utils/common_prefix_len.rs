/// Length of the longest run of equal items at the start of both slices.
pub fn common_prefix_len<T>(old: &[T], new: &[T]) -> usize
where
    T: PartialEq,
{
    old.iter()
        .zip(new)
        .take_while(|(old, new)| old == new)
        .count()
}
