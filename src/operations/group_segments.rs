use super::ChangeOp;
use crate::diffs::segment::Segment;

/// Coalesces aligned segments into operations. Equal segments pass through;
/// a removed run together with the added run right after it forms a single
/// change. A lone removed or added run still forms a change with the other
/// side left empty.
pub fn group_segments<I>(segments: I) -> Vec<ChangeOp>
where
    I: IntoIterator<Item = Segment>,
{
    let mut segments = segments.into_iter().peekable();
    let mut result = Vec::new();

    while let Some(segment) = segments.next() {
        let (before, mut after) = match segment {
            Segment::Equal(..) => {
                result.push(ChangeOp::equal(segment.text()));
                continue;
            }
            Segment::Removed(..) => {
                let mut before = segment.text();
                while let Some(removed) = segments.next_if(|s| matches!(s, Segment::Removed(..))) {
                    before.push_str(&removed.text());
                }
                (before, String::new())
            }
            Segment::Added(..) => (String::new(), segment.text()),
        };

        while let Some(added) = segments.next_if(|s| matches!(s, Segment::Added(..))) {
            after.push_str(&added.text());
        }

        result.push(ChangeOp::change(before, after));
    }

    result
}
