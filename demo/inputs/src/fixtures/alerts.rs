//! Alert feed and agent activity log.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use risk_core::model::{ActivityLogEntry, Alert, AlertId};
use risk_core::types::{LogSeverity, Severity};

/// Timestamp `days_ago` days before the reference date at `hour:minute` UTC.
fn stamp(reference_date: NaiveDate, days_ago: i64, hour: u32, minute: u32) -> DateTime<Utc> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default();
    (reference_date - Duration::days(days_ago))
        .and_time(time)
        .and_utc()
}

#[allow(clippy::too_many_arguments)]
fn alert(
    id: u32,
    severity: Severity,
    category: &str,
    title: &str,
    message: &str,
    timestamp: DateTime<Utc>,
    agent: &str,
    acknowledged: bool,
) -> Alert {
    Alert {
        id: AlertId(id),
        severity,
        category: category.to_string(),
        title: title.to_string(),
        message: message.to_string(),
        timestamp,
        agent: agent.to_string(),
        acknowledged,
    }
}

/// The seven alerts of the demo book, newest first. Ids 1-3 are open.
pub fn alerts(reference_date: NaiveDate) -> Vec<Alert> {
    let at = |days_ago, hour, minute| stamp(reference_date, days_ago, hour, minute);
    vec![
        alert(
            1,
            Severity::Critical,
            "Credit",
            "Concentration Breach: Commercial Real Estate",
            "CRE exposure has reached 312% of Tier 1 capital, exceeding the 300% regulatory guidance threshold. Immediate review recommended.",
            at(0, 9, 15),
            "Credit Sentinel",
            false,
        ),
        alert(
            2,
            Severity::High,
            "Market",
            "VaR Limit Breach: Interest Rate Desk",
            "1-day 99% VaR for interest rate portfolio exceeded $12.4M limit at $13.8M. Driven by yield curve steepening.",
            at(0, 8, 42),
            "Market Watcher",
            false,
        ),
        alert(
            3,
            Severity::High,
            "Credit",
            "Downgrade Watch: Meridian Holdings Corp",
            "Internal model probability of downgrade to sub-investment grade increased to 34% (from 12% last month). $145M exposure at risk.",
            at(0, 7, 30),
            "Credit Sentinel",
            false,
        ),
        alert(
            4,
            Severity::Medium,
            "Liquidity",
            "Funding Gap Detected: 30-60 Day Bucket",
            "Projected cumulative outflows exceed inflows by $280M in the 30-60 day maturity bucket. LCR remains above minimum at 118%.",
            at(1, 16, 20),
            "Liquidity Monitor",
            true,
        ),
        alert(
            5,
            Severity::Medium,
            "Market",
            "Correlation Shift Detected",
            "Equity-credit correlation has increased from 0.35 to 0.62 over the past 5 trading days. Historical stress events preceded by similar regime changes.",
            at(1, 14, 55),
            "Correlation Tracker",
            true,
        ),
        alert(
            6,
            Severity::Low,
            "Credit",
            "Portfolio Migration: Slight Negative Drift",
            "Weighted average rating migrated from BBB+ to BBB over Q4. Driven by downgrades in energy and retail sectors.",
            at(1, 11, 0),
            "Credit Sentinel",
            true,
        ),
        alert(
            7,
            Severity::Low,
            "Liquidity",
            "Deposit Concentration Update",
            "Top 20 depositors now represent 18.3% of total deposits (up from 16.7%). Within policy limits but trending upward.",
            at(2, 9, 30),
            "Liquidity Monitor",
            true,
        ),
    ]
}

fn entry(timestamp: &str, agent: &str, action: &str, detail: &str, severity: LogSeverity) -> ActivityLogEntry {
    ActivityLogEntry {
        timestamp: timestamp.to_string(),
        agent: agent.to_string(),
        action: action.to_string(),
        detail: detail.to_string(),
        severity,
    }
}

/// This morning's agent activity, newest first.
pub fn activity_log() -> Vec<ActivityLogEntry> {
    vec![
        entry("09:15:22", "Credit Sentinel", "ALERT", "CRE concentration breach detected - 312% of T1 capital", LogSeverity::Critical),
        entry("09:12:45", "Compliance Guardian", "CHECK", "Capital adequacy ratios validated - CET1 at 12.4%", LogSeverity::Info),
        entry("09:10:03", "Market Watcher", "COMPUTE", "Monte Carlo VaR updated: 1D 99% = $13.8M (limit: $12.4M)", LogSeverity::High),
        entry("09:08:17", "Liquidity Monitor", "FORECAST", "Cash flow projection updated for next 90 days", LogSeverity::Info),
        entry("09:05:30", "Correlation Tracker", "DETECT", "Equity-credit correlation regime shift: 0.35 \u{2192} 0.62", LogSeverity::Medium),
        entry("08:58:44", "Stress Architect", "GENERATE", "New AI scenario: CRE correction combined with rate shock", LogSeverity::Info),
        entry("08:55:12", "Credit Sentinel", "SCAN", "Completed daily borrower financial health scan (904 entities)", LogSeverity::Info),
        entry("08:42:00", "Market Watcher", "ALERT", "VaR limit breach: IR desk 1D 99% VaR = $13.8M > $12.4M limit", LogSeverity::High),
        entry("08:30:15", "Liquidity Monitor", "MONITOR", "Early morning deposit flow analysis complete - net inflow $42M", LogSeverity::Info),
        entry("08:15:00", "All Agents", "SYNC", "Daily data refresh and model recalibration complete", LogSeverity::Info),
    ]
}
