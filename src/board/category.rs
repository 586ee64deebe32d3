use std::fmt;

/// The fixed loan-product buckets shown on the board, in display order.
///
/// `as_str` values match the category strings the provider sends; grouping
/// takes the category list as a parameter so tests can use subsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    ThirtyYearFixed,
    FifteenYearFixed,
    FiveSixArm,
    Fha30Year,
    Va30Year,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::ThirtyYearFixed,
        Category::FifteenYearFixed,
        Category::FiveSixArm,
        Category::Fha30Year,
        Category::Va30Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ThirtyYearFixed => "30Y fixed",
            Category::FifteenYearFixed => "15Y fixed",
            Category::FiveSixArm => "5/6 ARM",
            Category::Fha30Year => "FHA 30Y",
            Category::Va30Year => "VA 30Y",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
