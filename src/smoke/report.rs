use crate::error::ApiError;

/// Result of a single endpoint check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    Failed,
}

/// What one check did, as data. Rendering is separate from running so tests
/// can assert on the lines instead of scraping stdout.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub name: String,
    pub outcome: CheckOutcome,
    pub lines: Vec<String>,
}

impl CheckReport {
    pub fn passed(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            outcome: CheckOutcome::Passed,
            lines,
        }
    }

    pub fn failed(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            outcome: CheckOutcome::Failed,
            lines,
        }
    }

    /// Failed report for an API error, rendered per error kind: transport
    /// errors print the cause, status errors print the numeric code and the
    /// raw body, malformed bodies print the named decode failure.
    pub fn from_error(name: impl Into<String>, err: &ApiError) -> Self {
        let line = match err {
            ApiError::Transport(source) => format!("request failed: {source}"),
            ApiError::UnexpectedStatus { status, body } => {
                format!("unexpected status {}: {}", status.as_u16(), body)
            }
            ApiError::MalformedResponse { .. } => err.to_string(),
        };
        Self::failed(name, vec![line])
    }

    pub fn is_passed(&self) -> bool {
        self.outcome == CheckOutcome::Passed
    }

    pub fn print(&self) {
        match self.outcome {
            CheckOutcome::Passed => println!("✓ {}", self.name),
            CheckOutcome::Failed => println!("✗ {}", self.name),
        }
        for line in &self.lines {
            println!("    {line}");
        }
    }
}

/// Ordered reports from one smoke run.
#[derive(Debug, Default)]
pub struct SmokeSummary {
    pub reports: Vec<CheckReport>,
}

impl SmokeSummary {
    pub fn push(&mut self, report: CheckReport) {
        self.reports.push(report);
    }

    pub fn passed_count(&self) -> usize {
        self.reports.iter().filter(|r| r.is_passed()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.reports.len() - self.passed_count()
    }

    pub fn all_passed(&self) -> bool {
        self.failed_count() == 0
    }

    pub fn print(&self) {
        for report in &self.reports {
            report.print();
        }
        println!();
        println!(
            "{} checks run: {} passed, {} failed",
            self.reports.len(),
            self.passed_count(),
            self.failed_count()
        );
    }
}
