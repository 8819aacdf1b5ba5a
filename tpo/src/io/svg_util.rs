use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::Path;
use svg::node::element::path::Data;
use treepack::geometry::primitives::{Rect, SPolygon};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Draw the enclosing square of the packing
    #[serde(default = "default_true")]
    pub bounding_square: bool,
    ///Write the id of each tree in its tooltip
    #[serde(default = "default_true")]
    pub tree_titles: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            bounding_square: true,
            tree_titles: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f32,
    pub background_fill: Color,
    pub tree_fill: Color,
    pub tree_stroke: Color,
    pub bounding_square_stroke: Color,
    pub label_fill: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        Self::NIGHT
    }
}

impl SvgLayoutTheme {
    pub const NIGHT: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        background_fill: Color(0x1A, 0x1A, 0x2E),
        tree_fill: Color(0x2E, 0xCC, 0x71),
        tree_stroke: Color(0x27, 0xAE, 0x60),
        bounding_square_stroke: Color(0xFF, 0x6B, 0x6B),
        label_fill: Color(0xFF, 0xFF, 0xFF),
    };
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color: {s:?}, expected #RRGGBB"
        );
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).with_context(|| format!("invalid color: {s:?}"))
        };
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

pub fn simple_polygon_data(s_poly: &SPolygon) -> Data {
    let mut data = Data::new().move_to(f32_pair(s_poly.vertex(0).into()));
    for i in 1..s_poly.n_vertices() {
        data = data.line_to(f32_pair(s_poly.vertex(i).into()));
    }
    data.close()
}

pub fn rect_data(rect: &Rect) -> Data {
    Data::new()
        .move_to(f32_pair((rect.x_min, rect.y_min)))
        .line_to(f32_pair((rect.x_max, rect.y_min)))
        .line_to(f32_pair((rect.x_max, rect.y_max)))
        .line_to(f32_pair((rect.x_min, rect.y_max)))
        .close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

fn f32_pair((x, y): (f64, f64)) -> (f32, f32) {
    (x as f32, y as f32)
}
