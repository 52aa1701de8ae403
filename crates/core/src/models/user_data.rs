use serde::{Deserialize, Serialize};

use super::insight::SavingsPlan;
use super::investor::InvestorProfile;
use super::notification::Notification;
use super::profile::FinancialProfile;
use super::settings::Settings;
use super::transaction::Transaction;

/// The main data container. Everything in here gets serialized,
/// encrypted, and saved to the portable .fnai file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    /// Monthly figures from the setup page
    pub profile: Option<FinancialProfile>,

    /// Recorded expenses, oldest first
    pub transactions: Vec<Transaction>,

    /// Removed transactions that can be restored
    pub trash: Vec<Transaction>,

    pub investor: Option<InvestorProfile>,

    pub savings_plan: SavingsPlan,

    pub notifications: Vec<Notification>,

    pub settings: Settings,
}
