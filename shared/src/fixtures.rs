//! 静态示例数据
//!
//! 所有页面共用同一份只读数据，避免在多个页面中复制相同的字面量。

use chrono::NaiveDate;
use serde::Serialize;

use crate::date::ISO_FORMAT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MealRecord {
    pub date: &'static str,
    pub quality: &'static str,
    pub concerns: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resident {
    pub id: u32,
    pub name: &'static str,
    pub age: u32,
    pub room: &'static str,
    pub health_status: &'static str,
    pub dietary_needs: &'static str,
    pub recent_meals: &'static [MealRecord],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Daily, Period::Weekly, Period::Monthly];

    pub fn label(&self) -> &'static str {
        match self {
            Period::Daily => "Daily",
            Period::Weekly => "Weekly",
            Period::Monthly => "Monthly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub id: u32,
    pub period: Period,
    pub title: &'static str,
    pub description: &'static str,
    pub suggestions: &'static [&'static str],
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snacks",
        }
    }

    /// 解析筛选值；`all` 或未知值返回 None
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// 养老院膳食计划中的一餐
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlannedMeal {
    pub id: u32,
    /// ISO `YYYY-MM-DD`
    pub date: &'static str,
    pub meal_type: MealType,
    pub name: &'static str,
    pub description: &'static str,
    pub nutrition_info: &'static str,
    pub dietary_tags: &'static [&'static str],
}

impl PlannedMeal {
    pub fn day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, ISO_FORMAT).ok()
    }
}

const MEAL_PLANS: &[PlannedMeal] = &[
    PlannedMeal {
        id: 1,
        date: "2025-11-12",
        meal_type: MealType::Breakfast,
        name: "Oatmeal with Berries",
        description: "Whole grain oatmeal with mixed berries and a touch of honey",
        nutrition_info: "High fiber, moderate protein, low sodium",
        dietary_tags: &["Vegetarian", "Low Sodium", "High Fiber"],
    },
    PlannedMeal {
        id: 2,
        date: "2025-11-12",
        meal_type: MealType::Lunch,
        name: "Grilled Chicken Salad",
        description: "Mixed greens with grilled chicken, cherry tomatoes, cucumber, and light vinaigrette",
        nutrition_info: "High protein, low carb, moderate fat",
        dietary_tags: &["Gluten-Free", "High Protein"],
    },
    PlannedMeal {
        id: 3,
        date: "2025-11-12",
        meal_type: MealType::Dinner,
        name: "Baked Salmon with Vegetables",
        description: "Oven-baked salmon fillet with steamed broccoli and carrots",
        nutrition_info: "High in omega-3, moderate protein, low carb",
        dietary_tags: &["Gluten-Free", "Dairy-Free", "High Omega-3"],
    },
    PlannedMeal {
        id: 4,
        date: "2025-11-13",
        meal_type: MealType::Breakfast,
        name: "Whole Grain Toast with Avocado",
        description: "Whole grain toast topped with mashed avocado and a soft-boiled egg",
        nutrition_info: "Healthy fats, moderate protein, high fiber",
        dietary_tags: &["Vegetarian", "High Fiber"],
    },
];

const RESIDENTS: &[Resident] = &[
    Resident {
        id: 1,
        name: "Eleanor Johnson",
        age: 78,
        room: "103A",
        health_status: "Stable",
        dietary_needs: "Low sodium, Diabetic",
        recent_meals: &[
            MealRecord { date: "2025-11-11", quality: "Good", concerns: "None" },
            MealRecord { date: "2025-11-10", quality: "Fair", concerns: "Low protein intake" },
        ],
    },
    Resident {
        id: 2,
        name: "Robert Williams",
        age: 82,
        room: "105B",
        health_status: "Needs attention",
        dietary_needs: "Soft foods, High protein",
        recent_meals: &[
            MealRecord { date: "2025-11-11", quality: "Poor", concerns: "Barely ate" },
            MealRecord { date: "2025-11-10", quality: "Fair", concerns: "Low appetite" },
        ],
    },
    Resident {
        id: 3,
        name: "Margaret Davis",
        age: 75,
        room: "110A",
        health_status: "Good",
        dietary_needs: "Vegetarian, High fiber",
        recent_meals: &[
            MealRecord { date: "2025-11-11", quality: "Excellent", concerns: "None" },
            MealRecord { date: "2025-11-10", quality: "Good", concerns: "None" },
        ],
    },
    Resident {
        id: 4,
        name: "Thomas Brown",
        age: 85,
        room: "107C",
        health_status: "Stable",
        dietary_needs: "Pureed foods, Thickened liquids",
        recent_meals: &[
            MealRecord { date: "2025-11-11", quality: "Good", concerns: "None" },
            MealRecord { date: "2025-11-10", quality: "Good", concerns: "None" },
        ],
    },
];

const RECOMMENDATIONS: &[Recommendation] = &[
    Recommendation {
        id: 1,
        period: Period::Daily,
        title: "Increase Calcium Intake",
        description: "Your calcium levels are below the recommended amount for your age group.",
        suggestions: &[
            "Add a serving of low-fat dairy to your breakfast",
            "Include leafy greens like kale or spinach in your lunch",
            "Consider calcium-fortified orange juice as a beverage option",
        ],
        priority: Priority::High,
    },
    Recommendation {
        id: 2,
        period: Period::Daily,
        title: "Reduce Sodium Consumption",
        description: "Your recent meals have been high in sodium, which can affect your blood pressure.",
        suggestions: &[
            "Use herbs and spices instead of salt for flavoring",
            "Choose fresh foods over processed options",
            "Rinse canned vegetables and beans before cooking",
        ],
        priority: Priority::Medium,
    },
    Recommendation {
        id: 3,
        period: Period::Daily,
        title: "Add More Fiber",
        description: "Increasing fiber can help with digestion and maintain healthy cholesterol levels.",
        suggestions: &[
            "Include whole grains like oatmeal or brown rice",
            "Add beans or lentils to soups and salads",
            "Eat fruits with the skin when possible (like apples)",
        ],
        priority: Priority::High,
    },
    Recommendation {
        id: 4,
        period: Period::Weekly,
        title: "Balance Your Protein Sources",
        description: "Try to include a variety of protein sources throughout the week.",
        suggestions: &[
            "Include fish at least twice a week",
            "Try plant-based proteins like tofu or tempeh",
            "Include lean poultry and limit red meat",
        ],
        priority: Priority::Medium,
    },
    Recommendation {
        id: 5,
        period: Period::Weekly,
        title: "Hydration Reminder",
        description: "Your water intake has been lower than recommended this week.",
        suggestions: &[
            "Keep a water bottle with you throughout the day",
            "Set reminders to drink water every hour",
            "Include hydrating foods like cucumber and watermelon",
        ],
        priority: Priority::High,
    },
    Recommendation {
        id: 6,
        period: Period::Monthly,
        title: "Vitamin D Levels",
        description: "Your vitamin D levels could be improved with more sun exposure and dietary sources.",
        suggestions: &[
            "Spend 15-20 minutes in morning sunlight when possible",
            "Include fatty fish like salmon in your diet",
            "Consider vitamin D fortified foods like certain cereals",
        ],
        priority: Priority::Medium,
    },
];

/// 只读示例数据提供者
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticFixtures;

impl StaticFixtures {
    pub fn residents(&self) -> &'static [Resident] {
        RESIDENTS
    }

    /// 按姓名或饮食需求搜索住户 (不区分大小写)
    pub fn search_residents(&self, term: &str) -> Vec<&'static Resident> {
        let term = term.trim().to_lowercase();
        RESIDENTS
            .iter()
            .filter(|r| {
                term.is_empty()
                    || r.name.to_lowercase().contains(&term)
                    || r.dietary_needs.to_lowercase().contains(&term)
            })
            .collect()
    }

    pub fn meal_plans(&self) -> &'static [PlannedMeal] {
        MEAL_PLANS
    }

    /// 某一天的膳食计划；`meal_type` 为 None 表示全部餐次
    pub fn meals_for(&self, date: NaiveDate, meal_type: Option<MealType>) -> Vec<&'static PlannedMeal> {
        MEAL_PLANS
            .iter()
            .filter(|m| m.day() == Some(date))
            .filter(|m| meal_type.is_none_or(|t| m.meal_type == t))
            .collect()
    }

    pub fn recommendations(&self, period: Period) -> impl Iterator<Item = &'static Recommendation> {
        RECOMMENDATIONS.iter().filter(move |r| r.period == period)
    }
}
