// ═══════════════════════════════════════════════════════════════════
// Service Tests — notifications, insights, chat, stocks, settings
// ═══════════════════════════════════════════════════════════════════

use chrono::{NaiveDate, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use finai_core::formatting::{format_currency, format_number, format_timestamp};
use finai_core::models::budget::BudgetThresholds;
use finai_core::models::insight::{InsightLevel, SavingsPlan};
use finai_core::models::investor::RiskTolerance;
use finai_core::models::notification::{NotificationCategory, NotificationType};
use finai_core::models::profile::FinancialProfile;
use finai_core::models::recommendation::{ProductCategory, ProductId, PRODUCTS};
use finai_core::models::settings::{Settings, DEFAULT_ADVICE_URL, ENV_ADVICE_URL, ENV_CURRENCY_SYMBOL};
use finai_core::models::stats::MonthlyTotal;
use finai_core::models::stock::StockAction;
use finai_core::models::transaction::{ExpenseCategory, Transaction};
use finai_core::normalize_profile;
use finai_core::services::advice_service::{AdviceService, AdvisorContext, AdvisorTopic};
use finai_core::services::chat_service::ChatService;
use finai_core::services::insight_service::InsightService;
use finai_core::services::notification_service::NotificationService;
use finai_core::services::recommendation_service::RecommendationService;
use finai_core::services::stats_service::StatsService;
use finai_core::services::stock_service::StockService;

// ═══════════════════════════════════════════════════════════════════
// Test Helpers
// ═══════════════════════════════════════════════════════════════════

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn notifier() -> NotificationService {
    NotificationService::new("₹", 0.7)
}

fn spending(income: f64, expenses: f64) -> finai_core::models::profile::NormalizedFigures {
    normalize_profile(&FinancialProfile::new("N", income, 0.0).with_expense("rent", expenses))
}

// ═══════════════════════════════════════════════════════════════════
// NotificationService
// ═══════════════════════════════════════════════════════════════════

mod notifications {
    use super::*;

    #[test]
    fn loss_raises_critical() {
        let n = notifier().evaluate(&spending(40_000.0, 45_500.0), &[], now()).unwrap();
        assert_eq!(n.notification_type, NotificationType::Critical);
        assert_eq!(n.category, NotificationCategory::Expense);
        assert_eq!(
            n.message,
            "You are at a loss! Your expenses (₹45,500) exceed your income (₹40,000) by ₹5,500. Immediate action required!"
        );
        assert!(!n.read);
        assert_eq!(n.timestamp, "1/6/2024, 12:00:00 pm");
    }

    #[test]
    fn above_warning_ratio_raises_warning() {
        let n = notifier().evaluate(&spending(10_000.0, 7_500.0), &[], now()).unwrap();
        assert_eq!(n.notification_type, NotificationType::Warning);
        assert_eq!(
            n.message,
            "Your expenses (₹7,500) are approaching 70% of your income! Please review and optimize your spending."
        );
    }

    #[test]
    fn healthy_spending_raises_nothing() {
        assert!(notifier().evaluate(&spending(10_000.0, 7_000.0), &[], now()).is_none());
    }

    #[test]
    fn same_type_is_not_duplicated() {
        let service = notifier();
        let figures = spending(10_000.0, 12_000.0);
        let first = service.evaluate(&figures, &[], now()).unwrap();
        assert!(service.evaluate(&figures, &[first.clone()], now()).is_none());

        // A warning does not block a later critical.
        let warning = service.evaluate(&spending(10_000.0, 8_000.0), &[], now()).unwrap();
        assert!(service.evaluate(&figures, &[warning], now()).is_some());
    }

    #[test]
    fn mark_read_and_dismiss() {
        let service = notifier();
        let n = service.evaluate(&spending(100.0, 200.0), &[], now()).unwrap();
        let id = n.id.clone();
        let mut list = vec![n];
        assert_eq!(service.unread_count(&list), 1);

        service.mark_read(&mut list, &id).unwrap();
        assert_eq!(service.unread_count(&list), 0);

        let removed = service.dismiss(&mut list, &id).unwrap();
        assert_eq!(removed.id, id);
        assert!(list.is_empty());
        assert!(service.dismiss(&mut list, &id).is_err());
        assert!(service.mark_read(&mut list, &id).is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
// InsightService
// ═══════════════════════════════════════════════════════════════════

mod insights {
    use super::*;

    #[test]
    fn stretched_budget_report() {
        let plan = SavingsPlan {
            goal_amount: 60_000.0,
            goal_months: 12,
            emergency_fund: 10_000.0,
        };
        let report = InsightService::new("₹").analyze(&plan, 50_000.0, 45_000.0);

        assert!((report.savings_rate - 10.0).abs() < 1e-9);
        let levels: Vec<InsightLevel> = report.insights.iter().map(|i| i.level).collect();
        assert_eq!(
            levels,
            vec![InsightLevel::Warning, InsightLevel::Critical, InsightLevel::Warning]
        );
        assert_eq!(
            report.insights[0].message,
            "Low savings rate (10.0%). Consider increasing SIP or cutting expenses."
        );
        assert_eq!(
            report.insights[1].message,
            "Expenses are 90.0% of income. Budget tightening recommended."
        );
        assert_eq!(
            report.insights[2].message,
            "Emergency fund covers only 0.2 months. Target: 3-6 months. Shortfall: ₹1,25,000"
        );
        assert!(report.goal_forecast.on_track);
        assert_eq!(report.goal_forecast.shortfall, 0.0);
    }

    #[test]
    fn off_track_goal() {
        let plan = SavingsPlan {
            goal_amount: 100_000.0,
            goal_months: 10,
            emergency_fund: 1_000_000.0,
        };
        let report = InsightService::new("₹").analyze(&plan, 20_000.0, 15_000.0);
        let forecast = report.goal_forecast;
        assert_eq!(forecast.projected_savings, 50_000.0);
        assert!((forecast.achievement_rate - 50.0).abs() < 1e-9);
        assert_eq!(forecast.shortfall, 50_000.0);
        assert!(!forecast.on_track);
        assert!(report
            .insights
            .iter()
            .any(|i| i.message == "Goal off track by 50.0%. Need to save ₹50,000 more."));
    }

    #[test]
    fn no_goal_and_no_expenses_raise_nothing_extra() {
        let report = InsightService::new("₹").analyze(&SavingsPlan::default(), 10_000.0, 0.0);
        assert!(report.insights.is_empty());
        assert_eq!(report.goal_forecast.achievement_rate, 0.0);
    }

    #[test]
    fn rebalance_split() {
        let plan = SavingsPlan {
            emergency_fund: 5_000.0,
            ..SavingsPlan::default()
        };
        let advice = InsightService::new("₹").rebalance(&plan, 5_000.0);
        assert!((advice.equity_sip - 6_000.0).abs() < 1e-6);
        assert!((advice.debt_sip - 3_000.0).abs() < 1e-6);
        assert!((advice.gold_sip - 1_000.0).abs() < 1e-6);
        assert_eq!(advice.emergency_fund, 5_000.0);
    }

    fn months(amounts: &[f64]) -> Vec<MonthlyTotal> {
        amounts
            .iter()
            .enumerate()
            .map(|(i, a)| MonthlyTotal {
                month: format!("2024-{:02}", i + 1),
                amount: *a,
            })
            .collect()
    }

    #[test]
    fn spike_detection() {
        let service = InsightService::new("₹");

        let spike = service.detect_spike(&months(&[900.0, 1_000.0, 1_200.0]));
        assert!(spike.spike_detected);
        assert!((spike.change_percent - 20.0).abs() < 1e-9);
        assert_eq!(spike.message.as_deref(), Some("Expense spike detected: +20.0% (₹1,200)"));

        let drop = service.detect_spike(&months(&[1_000.0, 500.0]));
        assert!(drop.spike_detected);
        assert!(drop.message.unwrap().starts_with("Expense spike detected: -50.0%"));

        let calm = service.detect_spike(&months(&[1_000.0, 1_100.0]));
        assert!(!calm.spike_detected);
        assert!(calm.message.is_none());
    }

    #[test]
    fn spike_needs_two_months() {
        let service = InsightService::new("₹");
        assert!(!service.detect_spike(&[]).spike_detected);
        assert!(!service.detect_spike(&months(&[500.0])).spike_detected);
        assert_eq!(service.detect_spike(&months(&[0.0, 500.0])).change_percent, 0.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
// StatsService — monthly totals
// ═══════════════════════════════════════════════════════════════════

mod monthly {
    use super::*;

    #[test]
    fn keeps_last_six_months_in_order() {
        let transactions: Vec<Transaction> = (1..=8)
            .flat_map(|m| {
                let d = NaiveDate::from_ymd_opt(2024, m, 10).unwrap();
                vec![
                    Transaction::new("Groceries", 100.0, d).unwrap(),
                    Transaction::new("Travel", m as f64, d).unwrap(),
                ]
            })
            .collect();
        let totals = StatsService::new().monthly_totals(&transactions);
        assert_eq!(totals.len(), 6);
        assert_eq!(totals[0].month, "2024-03");
        assert_eq!(totals[0].amount, 103.0);
        assert_eq!(totals[5].month, "2024-08");
    }
}

// ═══════════════════════════════════════════════════════════════════
// RecommendationService — product table & allocation score
// ═══════════════════════════════════════════════════════════════════

mod products {
    use super::*;

    #[test]
    fn table_is_indexed_by_id() {
        for product in PRODUCTS.iter() {
            assert_eq!(product.id.product(), product);
            assert!((0.0..=5.0).contains(&product.score));
        }
        assert_eq!(ProductId::Sp500Index.product().score, 4.9);
    }

    #[test]
    fn allocation_score_bands() {
        let s = RecommendationService::new();
        assert_eq!(s.allocation_score(20_000.0, 100_000.0, ProductCategory::Growth), 5);
        assert_eq!(s.allocation_score(34_000.0, 100_000.0, ProductCategory::Growth), 4);
        assert_eq!(s.allocation_score(6_000.0, 100_000.0, ProductCategory::Income), 4);
        assert_eq!(s.allocation_score(60_000.0, 100_000.0, ProductCategory::Balanced), 3);
        assert_eq!(s.allocation_score(45_000.0, 100_000.0, ProductCategory::Conservative), 5);
        assert_eq!(s.allocation_score(10.0, 0.0, ProductCategory::Growth), 3);
    }
}

// ═══════════════════════════════════════════════════════════════════
// ChatService
// ═══════════════════════════════════════════════════════════════════

mod chat {
    use super::*;

    #[test]
    fn keyword_topics_in_priority_order() {
        let chat = ChatService::new();
        // "save" wins over "how"
        assert!(chat.candidates("How do I save more?")[0].contains("budget"));
        assert_eq!(chat.candidates("How do I save more?").len(), 3);
        assert!(chat.candidates("tell me about TAX")[0].contains("80C"));
        assert!(chat.candidates("What's the weather?")[0].starts_with("Great question!"));
        assert!(chat.candidates("help")[0].starts_with("I'm here to help!"));
    }

    #[test]
    fn fallback_for_unknown_messages() {
        let chat = ChatService::new();
        let replies = chat.candidates("zzz");
        assert_eq!(replies.len(), 4);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(replies.contains(&chat.reply("zzz", &mut rng)));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let chat = ChatService::new();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for msg in ["invest", "budget", "retirement", "savings", "anything"] {
            assert_eq!(chat.reply(msg, &mut a), chat.reply(msg, &mut b));
        }
    }

    #[test]
    fn reply_is_one_of_the_candidates() {
        let chat = ChatService::new();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let reply = chat.reply("pension plans", &mut rng);
            assert!(chat.candidates("pension plans").contains(&reply));
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// StockService
// ═══════════════════════════════════════════════════════════════════

mod stocks {
    use super::*;

    #[test]
    fn filter_by_risk() {
        let symbols: Vec<&str> = StockService::new()
            .picks_for(RiskTolerance::Low)
            .iter()
            .map(|p| p.symbol)
            .collect();
        assert_eq!(symbols, vec!["RELIANCE", "TCS", "BAJAJ-AUTO"]);
        assert!(StockService::new().picks_for(RiskTolerance::High).is_empty());
    }

    #[test]
    fn top_buys_by_ten_day_outlook() {
        let buys = StockService::new().top_buys();
        assert_eq!(buys.len(), 5);
        assert_eq!(buys[0].symbol, "WIPRO");
        assert!(buys.iter().all(|p| p.action == StockAction::Buy));
    }

    #[test]
    fn find_and_project() {
        let service = StockService::new();
        let wipro = service.find(" wipro ").unwrap();
        assert!((service.projected_value(1_000.0, wipro) - 1_145.0).abs() < 1e-9);
        assert!(service.find("ACME").is_none());
    }
}

// ═══════════════════════════════════════════════════════════════════
// AdviceService — advisor prompt
// ═══════════════════════════════════════════════════════════════════

mod advisor {
    use super::*;

    #[test]
    fn context_prompt_lists_profile() {
        let ctx = AdvisorContext {
            total_portfolio: 250_000.0,
            monthly_income: 80_000.0,
            monthly_expenses: 50_000.0,
            savings_rate: 0.375,
            risk_tolerance: RiskTolerance::Medium,
            financial_goals: vec!["House".into(), "Retirement".into()],
            age: 32,
        };
        let prompt = AdviceService::new().advisor_context(&ctx);
        assert!(prompt.contains("Portfolio Value: ₹2,50,000\n"));
        assert!(prompt.contains("Disposable Income: ₹30,000\n"));
        assert!(prompt.contains("Savings Rate: 37.5%\n"));
        assert!(prompt.contains("Risk Tolerance: medium\n"));
        assert!(prompt.contains("Financial Goals: House, Retirement\n"));
    }

    #[test]
    fn custom_currency_symbol() {
        let figures = normalize_profile(&FinancialProfile::new("D", 1_000.0, 100.0));
        let text = AdviceService::with_currency_symbol("$").generate_advice_text(&figures);
        assert!(text.contains("Your monthly income is $1,000."));
    }

    #[test]
    fn topic_prompts() {
        assert_eq!(AdvisorTopic::Savings.prompt(), "How can I increase my savings rate?");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Models — categories, thresholds, settings, formatting
// ═══════════════════════════════════════════════════════════════════

mod models {
    use super::*;

    #[test]
    fn category_labels_parse_back() {
        for category in ExpenseCategory::ALL {
            assert_eq!(category.label().parse::<ExpenseCategory>().unwrap(), category);
        }
        assert_eq!(
            "food & dining".parse::<ExpenseCategory>().unwrap(),
            ExpenseCategory::FoodAndDining
        );
        assert!("Gadgets".parse::<ExpenseCategory>().is_err());
    }

    #[test]
    fn transaction_rejects_bad_amounts() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(Transaction::new("Groceries", 0.0, d).is_err());
        assert!(Transaction::new("Groceries", -1.0, d).is_err());
        assert!(Transaction::new("  ", 1.0, d).is_err());
        let tx = Transaction::new("Groceries", 1.0, d)
            .unwrap()
            .with_description("milk")
            .recurring(true);
        assert_eq!(tx.description.as_deref(), Some("milk"));
        assert!(tx.recurring);
    }

    #[test]
    fn thresholds_replace_in_place() {
        let mut t = BudgetThresholds::default();
        assert_eq!(t.len(), 4);
        t.set(ExpenseCategory::Groceries, 800.0).unwrap();
        assert_eq!(t.iter().next(), Some((ExpenseCategory::Groceries, 800.0)));
        assert!(t.set(ExpenseCategory::Travel, 0.0).is_err());
        assert!(t.remove(ExpenseCategory::Utilities));
        assert!(!t.remove(ExpenseCategory::Utilities));
        assert_eq!(t.get(ExpenseCategory::Utilities), None);
    }

    #[test]
    fn settings_overrides() {
        let settings = Settings::default().with_overrides_from(|key| match key {
            k if k == ENV_ADVICE_URL => Some("https://advice.example.com/".to_string()),
            k if k == ENV_CURRENCY_SYMBOL => Some(" $ ".to_string()),
            _ => None,
        });
        assert_eq!(settings.advice_backend_url, "https://advice.example.com");
        assert_eq!(settings.currency_symbol, "$");

        let untouched = Settings::default().with_overrides_from(|_| Some("   ".to_string()));
        assert_eq!(untouched.advice_backend_url, DEFAULT_ADVICE_URL);
        assert_eq!(untouched.currency_symbol, "₹");
    }

    #[test]
    fn indian_number_formatting() {
        assert_eq!(format_number(1_234_567.5), "12,34,567.5");
        assert_eq!(format_currency("₹", 999.125), "₹999.125");
    }

    #[test]
    fn locale_timestamps() {
        let morning = Utc.with_ymd_and_hms(2024, 10, 19, 9, 5, 7).unwrap();
        assert_eq!(format_timestamp(morning), "19/10/2024, 9:05:07 am");
        let midnight = Utc.with_ymd_and_hms(2024, 2, 4, 0, 30, 0).unwrap();
        assert_eq!(format_timestamp(midnight), "4/2/2024, 12:30:00 am");
    }
}
