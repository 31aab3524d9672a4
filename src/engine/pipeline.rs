// src/engine/pipeline.rs

use crate::model::{Role, WeekRecord};

/// Estimates units this role has ordered that have not arrived yet.
///
/// The game reports no in-transit figures, so we reconstruct the pipeline
/// from our own order history: with an effective lead time of L weeks, the
/// order placed L weeks ago is the one arriving right now, and the most
/// recent L - 1 orders are still on the road. Missing order entries count
/// as 0.
pub fn reconstruct_pipeline(history: &[WeekRecord], role: Role, lead_time: usize) -> u32 {
    if lead_time <= 1 || history.len() < 2 {
        return 0;
    }
    let take = (lead_time - 1).min(history.len() - 1);
    history
        .iter()
        .rev()
        .take(take)
        .map(|w| w.order_placed(role).unwrap_or(0))
        .fold(0u32, u32::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Qty;

    fn history_with_orders(orders: &[u32]) -> Vec<WeekRecord> {
        orders
            .iter()
            .enumerate()
            .map(|(i, &q)| {
                let mut week = WeekRecord::default();
                week.week = Qty(i as u32 + 1);
                *week.orders.get_mut(Role::Factory) = Some(Qty(q));
                week
            })
            .collect()
    }

    #[test]
    fn lead_time_one_means_empty_pipeline() {
        let history = history_with_orders(&[5, 9, 14, 3]);
        assert_eq!(reconstruct_pipeline(&history, Role::Factory, 1), 0);
        assert_eq!(reconstruct_pipeline(&history, Role::Factory, 0), 0);
    }

    #[test]
    fn sums_the_most_recent_orders_still_in_transit() {
        let history = history_with_orders(&[5, 9, 14, 3]);
        // L = 3: the last two orders (14 and 3) have not arrived yet.
        assert_eq!(reconstruct_pipeline(&history, Role::Factory, 3), 17);
    }

    #[test]
    fn short_history_caps_the_window() {
        let history = history_with_orders(&[5, 9]);
        // L - 1 = 4 but only one past order can still be in transit.
        assert_eq!(reconstruct_pipeline(&history, Role::Factory, 5), 9);
    }

    #[test]
    fn single_week_history_has_no_pipeline() {
        let history = history_with_orders(&[20]);
        assert_eq!(reconstruct_pipeline(&history, Role::Factory, 4), 0);
    }

    #[test]
    fn missing_order_entries_count_as_zero() {
        let mut history = history_with_orders(&[5, 9, 14]);
        *history[2].orders.get_mut(Role::Factory) = None;
        assert_eq!(reconstruct_pipeline(&history, Role::Factory, 3), 9);
    }
}
