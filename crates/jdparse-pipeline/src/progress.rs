/// Progress for one multi-unit batch, emitted once per completed unit in
/// completion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEvent {
    pub completed: usize,
    pub total: usize,
}

impl ProgressEvent {
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }

    pub fn message(&self) -> String {
        format!("processed {}/{} files", self.completed, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_and_message() {
        let event = ProgressEvent {
            completed: 2,
            total: 4,
        };
        assert!((event.fraction() - 0.5).abs() < f64::EPSILON);
        assert_eq!(event.message(), "processed 2/4 files");
    }
}
