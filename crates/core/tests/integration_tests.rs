// ═══════════════════════════════════════════════════════════════════
// Integration Tests — FinanceAdvisor end to end
// ═══════════════════════════════════════════════════════════════════

use chrono::{NaiveDate, TimeZone, Utc};

use finai_core::errors::CoreError;
use finai_core::models::insight::SavingsPlan;
use finai_core::models::investor::{InvestorProfile, RiskTolerance};
use finai_core::models::notification::NotificationType;
use finai_core::models::profile::FinancialProfile;
use finai_core::models::recommendation::ProductId;
use finai_core::models::transaction::{ExpenseCategory, Transaction};
use finai_core::storage::store::{JsonFileStore, KeyValueStore, MemoryStore, NOTIFICATIONS_KEY, PROFILE_KEY};
use finai_core::FinanceAdvisor;

// ═══════════════════════════════════════════════════════════════════
// Test Helpers
// ═══════════════════════════════════════════════════════════════════

fn d(m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, m, day).unwrap()
}

fn profile(income: f64, expenses: f64) -> FinancialProfile {
    FinancialProfile::new("Kiran", income, income * 0.2)
        .with_expense("groceries", expenses * 0.5)
        .with_expense("rent", expenses * 0.5)
}

// ═══════════════════════════════════════════════════════════════════
// Profile & advice
// ═══════════════════════════════════════════════════════════════════

mod profile_and_advice {
    use super::*;

    #[test]
    fn new_advisor_is_clean_and_empty() {
        let advisor = FinanceAdvisor::with_seed(0);
        assert!(!advisor.has_unsaved_changes());
        assert!(advisor.profile().is_none());
        assert!(advisor.advice_text().is_none());
        assert!(advisor.insights().is_none());
        assert!(advisor.recommendations().is_empty());
        assert!(advisor.budget_alerts().is_empty());
    }

    #[test]
    fn invalid_profile_is_rejected_and_state_unchanged() {
        let mut advisor = FinanceAdvisor::with_seed(0);
        let err = advisor
            .set_profile(FinancialProfile::new("Bad", -10.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
        assert!(advisor.profile().is_none());
        assert!(!advisor.has_unsaved_changes());
    }

    #[test]
    fn advice_uses_configured_currency() {
        let mut advisor = FinanceAdvisor::with_seed(0);
        advisor.set_profile(profile(10_000.0, 4_000.0)).unwrap();
        assert!(advisor.advice_text().unwrap().contains("₹10,000"));

        advisor.set_currency_symbol("Rs.").unwrap();
        assert!(advisor.advice_text().unwrap().contains("Rs.10,000"));
        assert!(advisor.set_currency_symbol("  ").is_err());
    }

    #[test]
    fn normalized_figures_follow_profile() {
        let mut advisor = FinanceAdvisor::with_seed(0);
        advisor.set_profile(profile(10_000.0, 4_000.0)).unwrap();
        let figures = advisor.normalized_figures().unwrap();
        assert_eq!(figures.total_expenses, 4_000.0);
        assert_eq!(figures.remaining_after_goal, 4_000.0);

        advisor.clear_profile();
        assert!(advisor.normalized_figures().is_none());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Transactions, budgets & statistics
// ═══════════════════════════════════════════════════════════════════

mod transactions {
    use super::*;

    #[test]
    fn add_remove_and_undo() {
        let mut advisor = FinanceAdvisor::with_seed(0);
        let a = advisor.add_expense("Groceries", 300.0, d(1, 5)).unwrap();
        let b = advisor.add_expense("Utilities", 80.0, d(1, 9)).unwrap();
        let c = advisor.add_expense("Travel", 900.0, d(1, 20)).unwrap();
        assert!(advisor.has_unsaved_changes());

        let removed = advisor.remove_transaction(b).unwrap();
        assert_eq!(removed.category, "Utilities");
        assert_eq!(advisor.trash().len(), 1);
        assert!(advisor.get_transaction(b).is_none());

        let restored = advisor.undo_last_removal().unwrap();
        assert_eq!(restored.id, b);
        let ids: Vec<_> = advisor.transactions().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a, b, c]);
        assert!(advisor.undo_last_removal().is_none());
    }

    #[test]
    fn back_dated_expense_stays_chronological() {
        let mut advisor = FinanceAdvisor::with_seed(0);
        let first = advisor.add_expense("Shopping", 100.0, d(3, 1)).unwrap();
        advisor.add_expense("Shopping", 200.0, d(3, 2)).unwrap();
        let late = advisor.add_expense("Shopping", 50.0, d(3, 1)).unwrap();
        advisor.add_expense("Shopping", 400.0, d(1, 1)).unwrap();

        let dates: Vec<_> = advisor.transactions().iter().map(|t| t.date).collect();
        assert_eq!(dates, vec![d(1, 1), d(3, 1), d(3, 1), d(3, 2)]);
        assert_eq!(advisor.transactions()[1].id, first);
        assert_eq!(advisor.transactions()[2].id, late);
    }

    #[test]
    fn unknown_and_duplicate_ids() {
        let mut advisor = FinanceAdvisor::with_seed(0);
        assert!(matches!(
            advisor.remove_transaction(uuid::Uuid::new_v4()),
            Err(CoreError::NotFound(_))
        ));

        let tx = Transaction::new("Books", 12.0, d(2, 1)).unwrap();
        advisor.add_transaction(tx.clone()).unwrap();
        assert!(advisor.add_transaction(tx).is_err());
        assert!(advisor.add_expense("Books", 0.0, d(2, 1)).is_err());
    }

    #[test]
    fn alerts_follow_configured_budgets() {
        let mut advisor = FinanceAdvisor::with_seed(0);
        advisor.add_expense("Groceries", 600.0, d(3, 1)).unwrap();
        advisor.add_expense("Travel", 5_000.0, d(3, 2)).unwrap();

        let alerts = advisor.budget_alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].percentage_over, 20);

        advisor.set_budget(ExpenseCategory::Travel, 2_500.0).unwrap();
        let alerts = advisor.budget_alerts();
        assert_eq!(alerts[0].category, "Travel");
        assert_eq!(alerts[0].percentage_over, 100);

        assert!(advisor.remove_budget(ExpenseCategory::Groceries));
        assert_eq!(advisor.budget_alerts().len(), 1);
    }

    #[test]
    fn stats_suggestions_and_spike() {
        let mut advisor = FinanceAdvisor::with_seed(0);
        advisor.set_profile(profile(1_000.0, 500.0)).unwrap();
        advisor.add_expense("Entertainment", 200.0, d(4, 3)).unwrap();
        advisor.add_expense("Groceries", 400.0, d(5, 3)).unwrap();
        advisor.add_expense("Groceries", 300.0, d(5, 9)).unwrap();

        let stats = advisor.category_stats();
        assert_eq!(stats[0].category, "Groceries");
        assert_eq!(stats[0].total_spent, 700.0);

        let suggestions = advisor.budget_suggestions();
        assert_eq!(suggestions[0].category, "Overall");
        assert_eq!(suggestions[1].category, "Entertainment");

        let months = advisor.monthly_totals();
        assert_eq!(months.len(), 2);
        let spike = advisor.spending_spike();
        assert!(spike.spike_detected);
        assert!((spike.change_percent - 250.0).abs() < 1e-9);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Investing & insights
// ═══════════════════════════════════════════════════════════════════

mod investing {
    use super::*;

    #[test]
    fn recommendations_and_stock_picks() {
        let mut advisor = FinanceAdvisor::with_seed(0);
        assert_eq!(advisor.stock_picks().len(), 6);

        advisor
            .set_investor_profile(InvestorProfile::new(25, RiskTolerance::High, 15, 100_000.0))
            .unwrap();
        let recs = advisor.recommendations();
        assert_eq!(recs[0].product, ProductId::TechGrowth);
        assert_eq!(recs.len(), 4);
        assert!(advisor.stock_picks().is_empty());

        let invalid = InvestorProfile::new(30, RiskTolerance::Low, 5, -1.0);
        assert!(advisor.set_investor_profile(invalid).is_err());
        assert_eq!(advisor.investor_profile().unwrap().age, 25);
    }

    #[test]
    fn insights_from_profile_and_plan() {
        let mut advisor = FinanceAdvisor::with_seed(0);
        advisor.set_profile(profile(10_000.0, 9_000.0)).unwrap();
        advisor
            .set_savings_plan(SavingsPlan {
                goal_amount: 50_000.0,
                goal_months: 10,
                emergency_fund: 0.0,
            })
            .unwrap();

        let report = advisor.insights().unwrap();
        assert!((report.savings_rate - 10.0).abs() < 1e-9);
        assert_eq!(report.insights.len(), 4);
        assert!(!report.goal_forecast.on_track);

        let zero_months = SavingsPlan {
            goal_months: 0,
            ..SavingsPlan::default()
        };
        assert!(advisor.set_savings_plan(zero_months).is_err());
    }

    #[test]
    fn advisor_prompt_needs_both_profiles() {
        let mut advisor = FinanceAdvisor::with_seed(0);
        advisor.set_profile(profile(50_000.0, 30_000.0)).unwrap();
        assert!(advisor.advisor_prompt(&[]).is_none());

        advisor
            .set_investor_profile(InvestorProfile::new(40, RiskTolerance::Medium, 10, 300_000.0))
            .unwrap();
        let prompt = advisor.advisor_prompt(&["Child education".to_string()]).unwrap();
        assert!(prompt.contains("Savings Rate: 40.0%"));
        assert!(prompt.contains("Age: 40"));
        assert!(prompt.contains("Financial Goals: Child education"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Notifications
// ═══════════════════════════════════════════════════════════════════

mod notifications {
    use super::*;

    #[test]
    fn refresh_raises_once_per_type_newest_first() {
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 8, 0, 0).unwrap();
        let mut advisor = FinanceAdvisor::with_seed(0);
        assert!(advisor.refresh_notifications(now).is_none());

        advisor.set_profile(profile(10_000.0, 8_000.0)).unwrap();
        let warning = advisor.refresh_notifications(now).unwrap();
        assert!(advisor.refresh_notifications(now).is_none());

        advisor.set_profile(profile(10_000.0, 11_000.0)).unwrap();
        let critical = advisor.refresh_notifications(now).unwrap();

        let list = advisor.notifications();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, critical);
        assert_eq!(list[0].notification_type, NotificationType::Critical);
        assert_eq!(list[1].id, warning);
        assert_eq!(advisor.unread_notification_count(), 2);

        advisor.mark_notification_read(&warning).unwrap();
        assert_eq!(advisor.unread_notification_count(), 1);
        advisor.dismiss_notification(&critical).unwrap();
        assert_eq!(advisor.notifications().len(), 1);
        advisor.clear_notifications();
        assert!(advisor.notifications().is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Chat
// ═══════════════════════════════════════════════════════════════════

mod chat {
    use super::*;

    #[test]
    fn same_seed_same_conversation() {
        let mut a = FinanceAdvisor::with_seed(2024);
        let mut b = FinanceAdvisor::with_seed(2024);
        for msg in ["how to invest?", "budget tips", "tax", "hello", "retirement"] {
            assert_eq!(a.chat_reply(msg), b.chat_reply(msg));
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Persistence through the facade
// ═══════════════════════════════════════════════════════════════════

mod persistence {
    use super::*;

    #[test]
    fn encrypted_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.fnai");
        let path = path.to_str().unwrap();

        let mut advisor = FinanceAdvisor::with_seed(0);
        advisor.set_profile(profile(20_000.0, 5_000.0)).unwrap();
        advisor.add_expense("Groceries", 120.0, d(6, 1)).unwrap();
        advisor.save_to_file(path, "hunter2").unwrap();
        assert!(!advisor.has_unsaved_changes());

        let loaded = FinanceAdvisor::load_from_file(path, "hunter2").unwrap();
        assert_eq!(loaded.user_data(), advisor.user_data());
        assert!(!loaded.has_unsaved_changes());

        assert!(matches!(
            FinanceAdvisor::load_from_file(path, "wrong"),
            Err(CoreError::Decryption)
        ));
    }

    #[test]
    fn change_password_verifies_current() {
        let mut advisor = FinanceAdvisor::with_seed(0);
        let saved = advisor.save_to_bytes("old").unwrap();
        assert!(advisor.change_password(&saved, "bad", "new").is_err());

        let rekeyed = advisor.change_password(&saved, "old", "new").unwrap();
        assert!(FinanceAdvisor::load_from_bytes(&rekeyed, "new").is_ok());
    }

    #[test]
    fn key_value_sync_and_restore() {
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 8, 0, 0).unwrap();
        let mut advisor = FinanceAdvisor::with_seed(0);
        advisor.set_profile(profile(10_000.0, 12_000.0)).unwrap();
        advisor.refresh_notifications(now).unwrap();

        let mut store = MemoryStore::new();
        advisor.sync_to_store(&mut store).unwrap();
        assert!(store.get(PROFILE_KEY).unwrap().is_some());

        let mut fresh = FinanceAdvisor::with_seed(0);
        fresh.restore_from_store(&mut store).unwrap();
        assert_eq!(fresh.profile(), advisor.profile());
        assert_eq!(fresh.notifications(), advisor.notifications());
        assert!(fresh.has_unsaved_changes());
    }

    #[test]
    fn restores_notifications_from_web_view() {
        let mut store = MemoryStore::new();
        store
            .set(
                NOTIFICATIONS_KEY,
                r#"[{"id":"1729300000000","type":"warning","message":"Review spending","category":"expense","timestamp":"19/10/2024, 10:00:00 am","read":false}]"#.into(),
            )
            .unwrap();

        let mut advisor = FinanceAdvisor::with_seed(0);
        advisor.restore_from_store(&mut store).unwrap();
        assert_eq!(advisor.notifications().len(), 1);
        advisor.mark_notification_read("1729300000000").unwrap();
        assert_eq!(advisor.unread_notification_count(), 0);
    }

    #[test]
    fn json_file_store_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local-storage.json");

        let mut advisor = FinanceAdvisor::with_seed(0);
        advisor.set_profile(profile(30_000.0, 10_000.0)).unwrap();
        let mut store = JsonFileStore::open(&path).unwrap();
        advisor.sync_to_store(&mut store).unwrap();

        let mut reopened = JsonFileStore::open(&path).unwrap();
        let mut restored = FinanceAdvisor::with_seed(0);
        restored.restore_from_store(&mut reopened).unwrap();
        assert_eq!(restored.profile().unwrap().name, "Kiran");
        assert!(restored.notifications().is_empty());
    }
}
