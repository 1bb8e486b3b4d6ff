use serde::Serialize;

/// Which part of a (possibly multi-day) bar a single day cell draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Single,
    Start,
    Middle,
    End,
}

impl Segment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Single => "single",
            Segment::Start => "start",
            Segment::Middle => "middle",
            Segment::End => "end",
        }
    }

    /// Only the first visible cell of a bar carries a width.
    pub fn opens_bar(&self) -> bool {
        matches!(self, Segment::Single | Segment::Start)
    }

    pub fn closes_bar(&self) -> bool {
        matches!(self, Segment::Single | Segment::End)
    }
}
