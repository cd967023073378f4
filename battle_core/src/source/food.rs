//! FoodSource - Stats from eaten food

use crate::config::Catalogs;
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;

/// Health and stamina from one food slot
pub struct FoodSource {
    pub food: String,
}

impl FoodSource {
    pub fn new(food: impl Into<String>) -> Self {
        FoodSource { food: food.into() }
    }
}

impl StatSource for FoodSource {
    fn id(&self) -> &str {
        &self.food
    }

    fn priority(&self) -> i32 {
        100
    }

    fn apply(&self, catalogs: &Catalogs, stats: &mut StatAccumulator) {
        let food = catalogs.food(&self.food);
        stats.health_flat += i64::from(food.health);
        stats.stamina_flat += i64::from(food.stamina);
    }
}
