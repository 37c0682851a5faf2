use serde::{Deserialize, Serialize};

/// Time primitives
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(pub f64); // seconds

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimeSpan {
    pub start: Time,
    pub end: Time,
}

impl TimeSpan {
    /// Length in seconds; zero for a reversed span.
    pub fn duration(&self) -> f64 {
        (self.end.0 - self.start.0).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Time, TimeSpan};

    #[test]
    fn duration_never_negative() {
        let span = TimeSpan {
            start: Time(10.0),
            end: Time(20.0),
        };
        assert_eq!(span.duration(), 10.0);

        let reversed = TimeSpan {
            start: Time(20.0),
            end: Time(10.0),
        };
        assert_eq!(reversed.duration(), 0.0);
    }
}
