pub mod errors;
pub mod formatting;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use chrono::{DateTime, NaiveDate, Utc};
use models::{
    budget::{BudgetAlert, BudgetSuggestion, BudgetThresholds},
    insight::{InsightReport, SavingsPlan, SpendingSpike},
    investor::InvestorProfile,
    notification::Notification,
    profile::{FinancialProfile, NormalizedFigures},
    recommendation::Recommendation,
    settings::Settings,
    stats::{CategoryStats, MonthlyTotal},
    stock::StockPick,
    transaction::{ExpenseCategory, Transaction},
    user_data::UserData,
};
use providers::traits::{AdviceBackend, RemoteAdvice, UserRegistration};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use services::{
    advice_service::{AdviceService, AdvisorContext},
    budget_service::BudgetService,
    chat_service::ChatService,
    insight_service::InsightService,
    notification_service::NotificationService,
    profile_service::ProfileService,
    recommendation_service::RecommendationService,
    stats_service::StatsService,
    stock_service::StockService,
};
use storage::manager::StorageManager;
use storage::store::{KeyValueStore, ProfileStore};
use uuid::Uuid;

use errors::CoreError;

// ── Plain function interface ────────────────────────────────────────

/// Derive totals, ratios and the remainder after the savings goal.
pub fn normalize_profile(profile: &FinancialProfile) -> NormalizedFigures {
    ProfileService::new().normalize(profile)
}

/// Over-budget alerts, largest overage first.
pub fn compute_budget_alerts(transactions: &[Transaction], thresholds: &BudgetThresholds) -> Vec<BudgetAlert> {
    BudgetService::new().compute_alerts(transactions, thresholds)
}

/// Per-category totals, averages and trends, largest total first.
pub fn compute_category_stats(transactions: &[Transaction]) -> Vec<CategoryStats> {
    StatsService::new().compute_stats(transactions)
}

/// At most three spending cuts worth considering.
pub fn suggest_budget_optimizations(transactions: &[Transaction], monthly_income: f64) -> Vec<BudgetSuggestion> {
    StatsService::new().suggest_optimizations(transactions, monthly_income)
}

/// At most five products, highest score first.
pub fn generate_recommendations(profile: &InvestorProfile) -> Vec<Recommendation> {
    RecommendationService::new().generate(profile)
}

/// The dashboard advice report, amounts in rupees.
pub fn generate_advice_text(figures: &NormalizedFigures) -> String {
    AdviceService::new().generate_advice_text(figures)
}

// ── Facade ──────────────────────────────────────────────────────────

/// Main entry point for the FinAI core library.
/// Holds the user's state and the engines that operate on it.
#[must_use]
pub struct FinanceAdvisor {
    data: UserData,
    profile_service: ProfileService,
    budget_service: BudgetService,
    stats_service: StatsService,
    recommendation_service: RecommendationService,
    chat_service: ChatService,
    stock_service: StockService,
    /// Source of variety for chat replies only.
    rng: StdRng,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for FinanceAdvisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceAdvisor")
            .field("has_profile", &self.data.profile.is_some())
            .field("transactions", &self.data.transactions.len())
            .field("notifications", &self.data.notifications.len())
            .field("settings", &self.data.settings)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl FinanceAdvisor {
    /// Start with empty state and default settings.
    pub fn create_new() -> Self {
        Self::build(UserData::default(), StdRng::seed_from_u64(rand::rng().next_u64()))
    }

    /// Like [`FinanceAdvisor::create_new`], with a fixed chat seed so reply
    /// selection is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(UserData::default(), StdRng::seed_from_u64(seed))
    }

    /// Wrap previously loaded state.
    pub fn from_user_data(data: UserData) -> Self {
        Self::build(data, StdRng::seed_from_u64(rand::rng().next_u64()))
    }

    /// Load state from encrypted bytes (password required).
    pub fn load_from_bytes(encrypted: &[u8], password: &str) -> Result<Self, CoreError> {
        let data = StorageManager::load_from_bytes(encrypted, password)?;
        Ok(Self::from_user_data(data))
    }

    /// Save state to encrypted bytes. Clears the unsaved-changes flag.
    pub fn save_to_bytes(&mut self, password: &str) -> Result<Vec<u8>, CoreError> {
        let bytes = StorageManager::save_to_bytes(&self.data, password)?;
        self.dirty = false;
        Ok(bytes)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str, password: &str) -> Result<Self, CoreError> {
        let data = StorageManager::load_from_file(path, password)?;
        Ok(Self::from_user_data(data))
    }

    /// Save to an encrypted file on disk. Clears the unsaved-changes flag.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(&mut self, path: &str, password: &str) -> Result<(), CoreError> {
        StorageManager::save_to_file(&self.data, path, password)?;
        self.dirty = false;
        Ok(())
    }

    /// The full state, e.g. for a custom persistence layer.
    pub fn user_data(&self) -> &UserData {
        &self.data
    }

    // ── Financial Profile ───────────────────────────────────────────

    /// Set or replace the monthly figures. Rejects negative amounts.
    pub fn set_profile(&mut self, profile: FinancialProfile) -> Result<(), CoreError> {
        if let Err(e) = profile.validate() {
            tracing::warn!(error = %e, "Rejected financial profile");
            return Err(e);
        }
        tracing::info!(categories = profile.expenses.len(), "Financial profile updated");
        self.data.profile = Some(profile);
        self.dirty = true;
        Ok(())
    }

    #[must_use]
    pub fn profile(&self) -> Option<&FinancialProfile> {
        self.data.profile.as_ref()
    }

    pub fn clear_profile(&mut self) {
        if self.data.profile.take().is_some() {
            self.dirty = true;
        }
    }

    #[must_use]
    pub fn normalized_figures(&self) -> Option<NormalizedFigures> {
        self.data
            .profile
            .as_ref()
            .map(|p| self.profile_service.normalize(p))
    }

    /// Advice report for the current profile, using the configured currency symbol.
    #[must_use]
    pub fn advice_text(&self) -> Option<String> {
        let figures = self.normalized_figures()?;
        Some(self.advice_service().generate_advice_text(&figures))
    }

    // ── Transactions ────────────────────────────────────────────────

    /// Record an expense. Returns its id.
    pub fn add_expense(&mut self, category: impl Into<String>, amount: f64, date: NaiveDate) -> Result<Uuid, CoreError> {
        let tx = Transaction::new(category, amount, date)?;
        self.add_transaction(tx)
    }

    /// Record a prepared transaction. Its id must be new.
    pub fn add_transaction(&mut self, tx: Transaction) -> Result<Uuid, CoreError> {
        if tx.category.trim().is_empty() || !tx.amount.is_finite() || tx.amount <= 0.0 {
            return Err(CoreError::invalid(format!(
                "invalid transaction: category '{}', amount {}",
                tx.category, tx.amount
            )));
        }
        if self.data.transactions.iter().any(|t| t.id == tx.id) {
            return Err(CoreError::invalid(format!("duplicate transaction id {}", tx.id)));
        }
        let id = tx.id;
        tracing::info!(category = %tx.category, amount = tx.amount, "Transaction added");
        self.insert_by_date(tx);
        self.dirty = true;
        Ok(id)
    }

    #[must_use]
    pub fn get_transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.data.transactions.iter().find(|t| t.id == id)
    }

    /// All transactions, oldest first.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.data.transactions
    }

    /// Move a transaction to the trash. Returns the removed transaction.
    pub fn remove_transaction(&mut self, id: Uuid) -> Result<Transaction, CoreError> {
        let idx = self
            .data
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CoreError::NotFound(format!("transaction {id}")))?;
        let tx = self.data.transactions.remove(idx);
        self.data.trash.push(tx.clone());
        self.dirty = true;
        Ok(tx)
    }

    /// Restore the most recently trashed transaction to its date position.
    /// `None` if the trash is empty.
    pub fn undo_last_removal(&mut self) -> Option<Transaction> {
        let tx = self.data.trash.pop()?;
        self.insert_by_date(tx.clone());
        self.dirty = true;
        Some(tx)
    }

    #[must_use]
    pub fn trash(&self) -> &[Transaction] {
        &self.data.trash
    }

    pub fn clear_trash(&mut self) {
        if !self.data.trash.is_empty() {
            self.data.trash.clear();
            self.dirty = true;
        }
    }

    // ── Budgets & Statistics ────────────────────────────────────────

    #[must_use]
    pub fn budget_thresholds(&self) -> &BudgetThresholds {
        &self.data.settings.budget_thresholds
    }

    pub fn set_budget(&mut self, category: ExpenseCategory, budget: f64) -> Result<(), CoreError> {
        self.data.settings.budget_thresholds.set(category, budget)?;
        self.dirty = true;
        Ok(())
    }

    /// Remove a category's budget. Returns `true` if one was set.
    pub fn remove_budget(&mut self, category: ExpenseCategory) -> bool {
        let removed = self.data.settings.budget_thresholds.remove(category);
        if removed {
            self.dirty = true;
        }
        removed
    }

    #[must_use]
    pub fn budget_alerts(&self) -> Vec<BudgetAlert> {
        self.budget_service
            .compute_alerts(&self.data.transactions, &self.data.settings.budget_thresholds)
    }

    #[must_use]
    pub fn category_stats(&self) -> Vec<CategoryStats> {
        self.stats_service.compute_stats(&self.data.transactions)
    }

    /// Suggestions against the profile's monthly income (0 without a profile).
    #[must_use]
    pub fn budget_suggestions(&self) -> Vec<BudgetSuggestion> {
        let income = self.data.profile.as_ref().map_or(0.0, |p| p.monthly_income);
        self.stats_service
            .suggest_optimizations(&self.data.transactions, income)
    }

    #[must_use]
    pub fn monthly_totals(&self) -> Vec<MonthlyTotal> {
        self.stats_service.monthly_totals(&self.data.transactions)
    }

    #[must_use]
    pub fn spending_spike(&self) -> SpendingSpike {
        self.insight_service().detect_spike(&self.monthly_totals())
    }

    // ── Investing ───────────────────────────────────────────────────

    pub fn set_investor_profile(&mut self, profile: InvestorProfile) -> Result<(), CoreError> {
        if let Err(e) = profile.validate() {
            tracing::warn!(error = %e, "Rejected investor profile");
            return Err(e);
        }
        tracing::info!(risk = %profile.risk_tolerance, age = profile.age, "Investor profile updated");
        self.data.investor = Some(profile);
        self.dirty = true;
        Ok(())
    }

    #[must_use]
    pub fn investor_profile(&self) -> Option<&InvestorProfile> {
        self.data.investor.as_ref()
    }

    /// Empty when no investor profile is set or no rule matches.
    #[must_use]
    pub fn recommendations(&self) -> Vec<Recommendation> {
        self.data
            .investor
            .as_ref()
            .map(|p| self.recommendation_service.generate(p))
            .unwrap_or_default()
    }

    /// Stock picks matching the investor's risk tolerance, or the whole
    /// catalog when no investor profile is set.
    #[must_use]
    pub fn stock_picks(&self) -> Vec<&'static StockPick> {
        match &self.data.investor {
            Some(p) => self.stock_service.picks_for(p.risk_tolerance),
            None => self.stock_service.all_picks().iter().collect(),
        }
    }

    // ── Savings Plan & Insights ─────────────────────────────────────

    pub fn set_savings_plan(&mut self, plan: SavingsPlan) -> Result<(), CoreError> {
        for (field, value) in [("goal amount", plan.goal_amount), ("emergency fund", plan.emergency_fund)] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::invalid(format!(
                    "{field} must be a non-negative number, got {value}"
                )));
            }
        }
        if plan.goal_months == 0 {
            return Err(CoreError::invalid("goal months must be at least 1"));
        }
        self.data.savings_plan = plan;
        self.dirty = true;
        Ok(())
    }

    #[must_use]
    pub fn savings_plan(&self) -> &SavingsPlan {
        &self.data.savings_plan
    }

    /// Insight report over the profile's income and expenses.
    #[must_use]
    pub fn insights(&self) -> Option<InsightReport> {
        let profile = self.data.profile.as_ref()?;
        Some(self.insight_service().analyze(
            &self.data.savings_plan,
            profile.monthly_income,
            profile.total_expenses(),
        ))
    }

    // ── Notifications ───────────────────────────────────────────────

    /// Raise a spending notification if the current profile calls for one.
    /// Newest notifications come first. Returns the id of the new one.
    pub fn refresh_notifications(&mut self, now: DateTime<Utc>) -> Option<String> {
        let figures = self.normalized_figures()?;
        let notification = self
            .notification_service()
            .evaluate(&figures, &self.data.notifications, now)?;
        let id = notification.id.clone();
        self.data.notifications.insert(0, notification);
        self.dirty = true;
        Some(id)
    }

    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.data.notifications
    }

    #[must_use]
    pub fn unread_notification_count(&self) -> usize {
        self.notification_service()
            .unread_count(&self.data.notifications)
    }

    pub fn mark_notification_read(&mut self, id: &str) -> Result<(), CoreError> {
        self.notification_service()
            .mark_read(&mut self.data.notifications, id)?;
        self.dirty = true;
        Ok(())
    }

    pub fn dismiss_notification(&mut self, id: &str) -> Result<Notification, CoreError> {
        let removed = self
            .notification_service()
            .dismiss(&mut self.data.notifications, id)?;
        self.dirty = true;
        Ok(removed)
    }

    pub fn clear_notifications(&mut self) {
        if !self.data.notifications.is_empty() {
            self.data.notifications.clear();
            self.dirty = true;
        }
    }

    // ── Chat ────────────────────────────────────────────────────────

    /// Scripted reply to a chat message.
    pub fn chat_reply(&mut self, message: &str) -> &'static str {
        self.chat_service.reply(message, &mut self.rng)
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.data.settings
    }

    pub fn set_currency_symbol(&mut self, symbol: impl Into<String>) -> Result<(), CoreError> {
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(CoreError::invalid("currency symbol must not be empty"));
        }
        self.data.settings.currency_symbol = symbol.trim().to_string();
        self.dirty = true;
        Ok(())
    }

    pub fn set_advice_backend_url(&mut self, url: impl Into<String>) -> Result<(), CoreError> {
        let url = url.into();
        let url = url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(CoreError::invalid(format!(
                "advice backend URL must start with http:// or https://, got '{url}'"
            )));
        }
        self.data.settings.advice_backend_url = url.trim_end_matches('/').to_string();
        self.dirty = true;
        Ok(())
    }

    /// Apply `FINAI_ADVICE_URL` / `FINAI_CURRENCY_SYMBOL` from the environment.
    pub fn apply_env_overrides(&mut self) {
        let updated = self.data.settings.clone().with_env_overrides();
        if updated != self.data.settings {
            self.data.settings = updated;
            self.dirty = true;
        }
    }

    // ── Remote Advice ───────────────────────────────────────────────

    /// Registration payload for the advice backend.
    #[must_use]
    pub fn user_registration(&self) -> Option<UserRegistration> {
        let profile = self.data.profile.as_ref()?;
        Some(UserRegistration {
            name: profile.name.clone(),
            monthly_income: profile.monthly_income,
            monthly_expenses: profile.total_expenses(),
            monthly_savings_goal: profile.monthly_savings_goal,
            expenses: profile.expenses.clone(),
        })
    }

    /// Register the current profile with `backend` and fetch its advice.
    pub async fn fetch_remote_advice(&self, backend: &dyn AdviceBackend) -> Result<RemoteAdvice, CoreError> {
        let registration = self
            .user_registration()
            .ok_or_else(|| CoreError::invalid("no financial profile set"))?;
        let user_id = backend.register_user(&registration).await?;
        tracing::debug!(backend = backend.name(), %user_id, "Fetching remote advice");
        backend.fetch_advice(&user_id).await
    }

    /// Prompt describing this user for an external advisor.
    /// Needs both a financial and an investor profile.
    #[must_use]
    pub fn advisor_prompt(&self, financial_goals: &[String]) -> Option<String> {
        let profile = self.data.profile.as_ref()?;
        let investor = self.data.investor.as_ref()?;
        let income = profile.monthly_income;
        let expenses = profile.total_expenses();
        let ctx = AdvisorContext {
            total_portfolio: investor.current_portfolio_value,
            monthly_income: income,
            monthly_expenses: expenses,
            savings_rate: if income > 0.0 { (income - expenses) / income } else { 0.0 },
            risk_tolerance: investor.risk_tolerance,
            financial_goals: financial_goals.to_vec(),
            age: investor.age,
        };
        Some(self.advice_service().advisor_context(&ctx))
    }

    // ── Key-Value Store Sync ────────────────────────────────────────

    /// Write the profile and notification list to a key-value store.
    pub fn sync_to_store<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), CoreError> {
        let mut profiles = ProfileStore::new(store);
        if let Some(profile) = &self.data.profile {
            profiles.save_profile(profile)?;
        }
        profiles.save_notifications(&self.data.notifications)
    }

    /// Replace the profile and notifications with what `store` holds.
    /// A missing profile entry leaves the current profile untouched.
    pub fn restore_from_store<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) -> Result<(), CoreError> {
        let profiles = ProfileStore::new(store);
        let profile = profiles.load_profile()?;
        let notifications = profiles.load_notifications()?;
        if let Some(profile) = profile {
            self.data.profile = Some(profile);
        }
        self.data.notifications = notifications;
        self.dirty = true;
        Ok(())
    }

    // ── Password & Dirty State ──────────────────────────────────────

    /// Re-encrypt with a new password after verifying the current one
    /// against the most recently saved bytes.
    pub fn change_password(
        &mut self,
        last_saved_bytes: &[u8],
        current_password: &str,
        new_password: &str,
    ) -> Result<Vec<u8>, CoreError> {
        StorageManager::load_from_bytes(last_saved_bytes, current_password)?;
        let new_bytes = StorageManager::save_to_bytes(&self.data, new_password)?;
        self.dirty = false;
        Ok(new_bytes)
    }

    /// Returns `true` if anything changed since the last save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(data: UserData, rng: StdRng) -> Self {
        Self {
            data,
            profile_service: ProfileService::new(),
            budget_service: BudgetService::new(),
            stats_service: StatsService::new(),
            recommendation_service: RecommendationService::new(),
            chat_service: ChatService::new(),
            stock_service: StockService::new(),
            rng,
            dirty: false,
        }
    }

    /// Keep transactions oldest first; equal dates keep insertion order.
    fn insert_by_date(&mut self, tx: Transaction) {
        let at = self
            .data
            .transactions
            .iter()
            .position(|t| t.date > tx.date)
            .unwrap_or(self.data.transactions.len());
        self.data.transactions.insert(at, tx);
    }

    fn advice_service(&self) -> AdviceService {
        AdviceService::with_currency_symbol(self.data.settings.currency_symbol.clone())
    }

    fn insight_service(&self) -> InsightService {
        InsightService::new(self.data.settings.currency_symbol.clone())
    }

    fn notification_service(&self) -> NotificationService {
        NotificationService::new(
            self.data.settings.currency_symbol.clone(),
            self.data.settings.expense_warning_ratio,
        )
    }
}
