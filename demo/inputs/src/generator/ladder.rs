//! Cash-flow maturity ladder.

use risk_core::model::{CashFlowBucket, CashFlowInput};

/// Derive net and cumulative positions for buckets in maturity order.
///
/// `net[i] = inflows[i] - outflows[i]` and `cumulative[i]` is the running sum
/// of `net` through bucket `i`. Input order is preserved. Both saturate at
/// the `i64` bounds.
///
/// # Examples
/// ```
/// use demo_inputs::generator::build_cash_flow_ladder;
/// use risk_core::model::CashFlowInput;
///
/// let ladder = build_cash_flow_ladder(&[
///     CashFlowInput::new("Overnight", 2_100, 1_800),
///     CashFlowInput::new("2-7 Days", 1_400, 1_600),
/// ]);
/// assert_eq!(ladder[0].cumulative, 300);
/// assert_eq!(ladder[1].net, -200);
/// assert_eq!(ladder[1].cumulative, 100);
/// ```
pub fn build_cash_flow_ladder(inputs: &[CashFlowInput]) -> Vec<CashFlowBucket> {
    inputs
        .iter()
        .scan(0i64, |running, input| {
            let net = input.inflows.saturating_sub(input.outflows);
            *running = running.saturating_add(net);
            Some(CashFlowBucket {
                bucket: input.bucket.clone(),
                inflows: input.inflows,
                outflows: input.outflows,
                net,
                cumulative: *running,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ladder() {
        assert!(build_cash_flow_ladder(&[]).is_empty());
    }

    #[test]
    fn test_single_bucket_cumulative_equals_net() {
        let ladder = build_cash_flow_ladder(&[CashFlowInput::new("Overnight", 10, 25)]);
        assert_eq!(ladder[0].net, -15);
        assert_eq!(ladder[0].cumulative, -15);
        assert!(ladder[0].is_gap());
    }

    #[test]
    fn test_order_preserved() {
        let inputs = vec![
            CashFlowInput::new("c", 0, 1),
            CashFlowInput::new("a", 5, 0),
            CashFlowInput::new("b", 0, 2),
        ];
        let ladder = build_cash_flow_ladder(&inputs);
        let labels: Vec<_> = ladder.iter().map(|b| b.bucket.as_str()).collect();
        assert_eq!(labels, vec!["c", "a", "b"]);
        let cumulative: Vec<_> = ladder.iter().map(|b| b.cumulative).collect();
        assert_eq!(cumulative, vec![-1, 4, 2]);
    }

    #[test]
    fn test_extreme_flows_saturate() {
        let ladder = build_cash_flow_ladder(&[
            CashFlowInput::new("a", i64::MIN, i64::MAX),
            CashFlowInput::new("b", -1, 0),
            CashFlowInput::new("c", i64::MAX, 0),
            CashFlowInput::new("d", i64::MAX, 0),
        ]);
        assert_eq!(ladder[0].net, i64::MIN);
        assert_eq!(ladder[1].cumulative, i64::MIN);
        assert_eq!(ladder[2].cumulative, -1);
        assert_eq!(ladder[3].cumulative, i64::MAX - 1);
    }
}
