//! Mock account data shown on the dashboard.
//!
//! There is no backend; these figures are fixed.

use super::cards::StatsCard;
use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrafficUsage {
    pub used_gib: f64,
    pub total_gib: f64,
}

impl TrafficUsage {
    pub fn remaining_gib(&self) -> f64 {
        (self.total_gib - self.used_gib).max(0.0)
    }

    /// Remaining traffic as a percentage of the total, 0 to 100.
    pub fn remaining_percent(&self) -> f64 {
        if self.total_gib <= 0.0 {
            return 0.0;
        }
        (self.remaining_gib() / self.total_gib * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountSummary {
    pub balance: f64,
    pub plan_name: String,
    pub plan_tags: Vec<String>,
    pub traffic: TrafficUsage,
    pub expires_at: Option<NaiveDateTime>,
}

impl AccountSummary {
    pub fn mock() -> Self {
        Self {
            balance: 128.50,
            plan_name: "Ultimate".to_string(),
            plan_tags: vec!["企业版".to_string(), "无限速".to_string()],
            traffic: TrafficUsage {
                used_gib: 15.71,
                total_gib: 502.0,
            },
            expires_at: NaiveDate::from_ymd_opt(2020, 12, 17)
                .and_then(|d| d.and_hms_opt(18, 4, 0)),
        }
    }

    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    /// Cards for the dashboard statistics row.
    pub fn stats_cards(&self, now: NaiveDateTime) -> Vec<StatsCard> {
        let traffic = StatsCard::new("剩余流量", format!("{:.2}", self.traffic.remaining_gib()))
            .with_suffix(format!("/ {} GiB", self.traffic.total_gib))
            .with_description(format!(
                "已使用 {:.2} GiB · {:.1}%",
                self.traffic.used_gib,
                self.traffic.remaining_percent()
            ));

        let plan = StatsCard::new("使用套餐", &self.plan_name)
            .with_description(self.plan_tags.join(" "));

        let expiry = match self.expires_at {
            Some(at) => {
                let card = StatsCard::new("账户过期", at.format("%Y/%m/%d"));
                let time = at.format("%H:%M:%S").to_string();
                if self.is_expired(now) {
                    card.with_description(format!("{} 已过期", time))
                } else {
                    card.with_description(time)
                }
            }
            None => StatsCard::new("账户过期", "长期有效"),
        };

        vec![traffic, plan, expiry]
    }

    pub fn balance_card(&self) -> StatsCard {
        StatsCard::new("账户余额", format!("{:.2}", self.balance)).with_prefix("¥")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_mock_traffic() {
        let account = AccountSummary::mock();
        assert!((account.traffic.remaining_gib() - 486.29).abs() < 1e-9);
        assert!((account.traffic.remaining_percent() - 96.87).abs() < 0.01);
    }

    #[test]
    fn test_traffic_overused_clamps() {
        let usage = TrafficUsage {
            used_gib: 10.0,
            total_gib: 5.0,
        };
        assert_eq!(usage.remaining_gib(), 0.0);
        assert_eq!(usage.remaining_percent(), 0.0);
        let empty = TrafficUsage {
            used_gib: 0.0,
            total_gib: 0.0,
        };
        assert_eq!(empty.remaining_percent(), 0.0);
    }

    #[test]
    fn test_expiry() {
        let account = AccountSummary::mock();
        assert!(account.is_expired(at(2026, 1, 1)));
        assert!(!account.is_expired(at(2020, 1, 1)));
    }

    #[test]
    fn test_stats_cards() {
        let cards = AccountSummary::mock().stats_cards(at(2026, 1, 1));
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].display_value(), "486.29 / 502 GiB");
        assert_eq!(cards[1].value, "Ultimate");
        assert_eq!(cards[2].value, "2020/12/17");
        assert_eq!(cards[2].description.as_deref(), Some("18:04:00 已过期"));
    }

    #[test]
    fn test_balance_card() {
        assert_eq!(AccountSummary::mock().balance_card().display_value(), "¥ 128.50");
    }
}
