// Seam for swapping the qualitative ESG rating without touching the engine

pub trait RatingPolicy {
    fn rate(&self, co2_avoided_tons_year: f64) -> String;
}
