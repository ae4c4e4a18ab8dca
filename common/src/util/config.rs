use crate::error::InvalidInput;
use crate::geom::Rect;
use crate::util::parse::rect_from_array;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rectangles: RectanglesConfig,
    #[serde(default)]
    pub pairs: PairsConfig,
}

/// Corners are `[upper_left.x, upper_left.y, lower_right.x, lower_right.y]`.
#[derive(Debug, Deserialize)]
pub struct RectanglesConfig {
    #[serde(default = "default_rect1")]
    pub rect1: [f64; 4],
    #[serde(default = "default_rect2")]
    pub rect2: [f64; 4],
}

impl Default for RectanglesConfig {
    fn default() -> Self {
        Self {
            rect1: default_rect1(),
            rect2: default_rect2(),
        }
    }
}

impl RectanglesConfig {
    pub fn rects(&self) -> Result<(Rect, Rect), InvalidInput> {
        Ok((rect_from_array(self.rect1)?, rect_from_array(self.rect2)?))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PairsConfig {
    #[serde(default = "default_target")]
    pub target: i64,
    #[serde(default = "default_values")]
    pub values: Vec<i64>,
    #[serde(default = "default_find_all")]
    pub find_all: bool,
    #[serde(default = "default_use_random")]
    pub use_random: bool,
    #[serde(default = "default_search_area")]
    pub search_area: usize,
    #[serde(default = "default_min")]
    pub min: i64,
    #[serde(default = "default_max")]
    pub max: i64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_report_limit")]
    pub report_limit: usize,
}

impl Default for PairsConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            values: default_values(),
            find_all: default_find_all(),
            use_random: default_use_random(),
            search_area: default_search_area(),
            min: default_min(),
            max: default_max(),
            seed: None,
            report_limit: default_report_limit(),
        }
    }
}

fn default_rect1() -> [f64; 4] {
    [0.0, 0.0, 2.0, 2.0]
}

fn default_rect2() -> [f64; 4] {
    [2.0, 2.0, 4.0, 4.0]
}

fn default_target() -> i64 {
    10
}

fn default_values() -> Vec<i64> {
    (1..=10).collect()
}

fn default_find_all() -> bool {
    true
}

fn default_use_random() -> bool {
    true
}

fn default_search_area() -> usize {
    100
}

fn default_min() -> i64 {
    1
}

fn default_max() -> i64 {
    101
}

fn default_report_limit() -> usize {
    20
}
