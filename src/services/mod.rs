pub mod benchmarks;
pub mod celebrations;
pub mod insights;
pub mod meals;
pub mod normalize;
pub mod range;
pub mod reminders;
pub mod report;
pub mod streaks;
pub mod wellness;
