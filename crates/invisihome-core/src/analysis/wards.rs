/// Service coverage for a single ward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ward {
    pub name: &'static str,
    /// Percent of the ward considered well-served
    pub served: u8,
    /// Percent of the ward considered underserved
    pub underserved: u8,
    pub population: u32,
}

pub const WARDS: [Ward; 4] = [
    Ward { name: "Ward 1", served: 75, underserved: 25, population: 45_000 },
    Ward { name: "Ward 2", served: 60, underserved: 40, population: 38_000 },
    Ward { name: "Ward 3", served: 85, underserved: 15, population: 52_000 },
    Ward { name: "Ward 4", served: 45, underserved: 55, population: 29_000 },
];

// Headline figures for the city as a whole
pub const WELL_SERVED_PERCENT: u8 = 66;
pub const UNDERSERVED_PERCENT: u8 = 34;
pub const IMPROVEMENT_RATE_PERCENT: i8 = 12;

pub fn total_population() -> u32 {
    WARDS.iter().map(|w| w.population).sum()
}
