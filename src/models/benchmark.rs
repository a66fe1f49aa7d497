use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BenchmarkStatus {
    Celebrate,
    OnTrack,
    UpNext,
    Warning,
}

/// A personalized target for one tracked metric.
///
/// `Warning` benchmarks track metrics where lower is better (stress, screen
/// time), so their progress is target/current rather than current/target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Benchmark {
    pub id: &'static str,
    pub label: &'static str,
    pub current: f64,
    pub target: f64,
    pub status: BenchmarkStatus,
    pub message: String,
    pub unit: &'static str,
}

impl Benchmark {
    /// Progress bar fill, 0-100.
    pub fn progress(&self) -> u32 {
        let ratio = if self.status == BenchmarkStatus::Warning {
            if self.current <= 0.0 || self.target <= 0.0 {
                return 0;
            }
            self.target / self.current
        } else if self.target > 0.0 {
            self.current / self.target
        } else {
            0.0
        };
        (ratio * 100.0).round().clamp(0.0, 100.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn benchmark(current: f64, target: f64, status: BenchmarkStatus) -> Benchmark {
        Benchmark {
            id: "test",
            label: "Test",
            current,
            target,
            status,
            message: String::new(),
            unit: "units",
        }
    }

    #[test]
    fn test_progress_regular() {
        assert_eq!(benchmark(6.0, 8.0, BenchmarkStatus::OnTrack).progress(), 75);
        assert_eq!(benchmark(12.0, 8.0, BenchmarkStatus::Celebrate).progress(), 100);
        assert_eq!(benchmark(3.0, 0.0, BenchmarkStatus::UpNext).progress(), 0);
    }

    #[test]
    fn test_progress_warning_is_inverted() {
        assert_eq!(benchmark(8.0, 5.0, BenchmarkStatus::Warning).progress(), 63);
        assert_eq!(benchmark(0.0, 5.0, BenchmarkStatus::Warning).progress(), 0);
    }

    #[test]
    fn test_status_serializes_camel_case() {
        let json = serde_json::to_value(BenchmarkStatus::OnTrack).unwrap();
        assert_eq!(json, "onTrack");
        let json = serde_json::to_value(BenchmarkStatus::UpNext).unwrap();
        assert_eq!(json, "upNext");
    }
}
