//! Scales mapping data values to pixels (or colors).
//!
//! These follow D3's conventions so the axes D3 draws from a serialized
//! scale line up with the marks positioned here.

use serde::Serialize;

use crate::config::Rgb;

/// Continuous linear map from `domain` onto `range`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearScale {
    pub domain: [f64; 2],
    pub range: [f64; 2],
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// Map a domain value onto the range. Values outside the domain
    /// extrapolate. A collapsed domain maps everything to the middle of
    /// the range.
    pub fn apply(&self, value: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let t = if d1 == d0 {
            0.5
        } else {
            (value - d0) / (d1 - d0)
        };
        r0 + (r1 - r0) * t
    }
}

/// Ordinal band scale over team codes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandScale {
    pub domain: Vec<String>,
    pub range: [f64; 2],
    pub padding: f64,
}

impl BandScale {
    /// `padding` is applied both between bands and at the outer edges.
    pub fn new(domain: Vec<String>, range: [f64; 2], padding: f64) -> Self {
        Self {
            domain,
            range,
            padding: padding.clamp(0.0, 1.0),
        }
    }

    /// Distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        let [r0, r1] = self.range;
        (r1 - r0) / (n - self.padding + self.padding * 2.0).max(1.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Start of the band at `index`.
    pub fn position_at(&self, index: usize) -> f64 {
        let n = self.domain.len() as f64;
        let [r0, r1] = self.range;
        let step = self.step();
        let start = r0 + (r1 - r0 - step * (n - self.padding)) * 0.5;
        start + step * index as f64
    }

    /// Start of the band for `key`, if it is in the domain.
    pub fn position(&self, key: &str) -> Option<f64> {
        self.domain
            .iter()
            .position(|d| d == key)
            .map(|i| self.position_at(i))
    }
}

/// Sequential color ramp between two colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorScale {
    pub domain: [f64; 2],
    pub low: Rgb,
    pub high: Rgb,
}

impl ColorScale {
    pub fn new(domain: [f64; 2], low: Rgb, high: Rgb) -> Self {
        Self { domain, low, high }
    }

    pub fn apply(&self, value: f64) -> Rgb {
        let t = LinearScale::new(self.domain, [0.0, 1.0]).apply(value);
        self.low.mix(self.high, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_linear_apply() {
        let s = LinearScale::new([0.0, 10.0], [0.0, 300.0]);
        assert_eq!(s.apply(0.0), 0.0);
        assert_eq!(s.apply(7.0), 210.0);
        assert_eq!(s.apply(10.0), 300.0);
    }

    #[test]
    fn test_linear_inverted_range() {
        let s = LinearScale::new([0.0, 10.0], [300.0, 0.0]);
        assert_eq!(s.apply(10.0), 0.0);
        assert_eq!(s.apply(2.5), 225.0);
    }

    #[test]
    fn test_linear_collapsed_domain() {
        let s = LinearScale::new([4.0, 4.0], [0.0, 100.0]);
        assert_eq!(s.apply(4.0), 50.0);
    }

    #[test]
    fn test_band_without_padding() {
        let s = BandScale::new(teams(&["A", "B", "C", "D"]), [0.0, 400.0], 0.0);
        assert_eq!(s.step(), 100.0);
        assert_eq!(s.bandwidth(), 100.0);
        assert_eq!(s.position("C"), Some(200.0));
        assert_eq!(s.position("Z"), None);
    }

    #[test]
    fn test_band_with_padding() {
        // d3.scaleBand().domain([A,B]).range([0,100]).padding(0.5)
        // step = 100 / (2 - 0.5 + 1) = 40, start = (100 - 40*1.5)/2 = 20
        let s = BandScale::new(teams(&["A", "B"]), [0.0, 100.0], 0.5);
        assert_eq!(s.step(), 40.0);
        assert_eq!(s.bandwidth(), 20.0);
        assert_eq!(s.position_at(0), 20.0);
        assert_eq!(s.position_at(1), 60.0);
    }

    #[test]
    fn test_color_scale_endpoints() {
        let low = Rgb::new(0, 0, 255);
        let high = Rgb::new(255, 0, 0);
        let s = ColorScale::new([80.0, 100.0], low, high);
        assert_eq!(s.apply(80.0), low);
        assert_eq!(s.apply(100.0), high);
        assert_eq!(s.apply(120.0), high);
    }
}
