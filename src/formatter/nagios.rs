use crate::check::Verdict;

/// Вывод в формате Nagios-плагина:
/// `STATE: finding\nfinding | perf1 perf2`
pub struct NagiosFormatter;

impl NagiosFormatter {
    pub fn format(verdict: &Verdict) -> String {
        let mut output = format!("{}: {}", verdict.severity, verdict.findings.join("\n"));

        if !verdict.metrics.is_empty() {
            let mut metrics: Vec<_> = verdict.metrics.iter().collect();
            metrics.sort_by(|a, b| a.key.cmp(&b.key));

            let perf_data: Vec<String> = metrics.iter().map(|m| m.to_string()).collect();
            output.push_str(" | ");
            output.push_str(&perf_data.join(" "));
        }

        output
    }
}
