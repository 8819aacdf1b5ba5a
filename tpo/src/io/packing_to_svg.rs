use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};
use treepack::entities::Packing;
use treepack::geometry::primitives::Rect;

use crate::io::svg_util;
use crate::io::svg_util::SvgDrawOptions;

/// Renders a packing: every tree, the square enclosing them and a label with its metrics.
/// The drawing follows the coordinates of the packing, the enclosing square is anchored at the lowest x and y of the trees.
pub fn packing_to_svg(packing: &Packing, options: SvgDrawOptions, title: &str) -> Document {
    let theme = &options.theme;

    let square = enclosing_square(packing);
    let vbox = square.scale(1.15);

    let stroke_width =
        (f64::min(vbox.width(), vbox.height()) * 0.001) as f32 * theme.stroke_width_multiplier;
    let font_size = (vbox.height() * 0.03) as f32;

    let background = Rectangle::new()
        .set("x", vbox.x_min)
        .set("y", vbox.y_min)
        .set("width", vbox.width())
        .set("height", vbox.height())
        .set("fill", theme.background_fill.to_string());

    let trees_group = {
        let mut trees_group = Group::new().set("id", "trees");
        for ps in packing.placed_shapes() {
            let mut path = svg_util::data_to_path(
                svg_util::simple_polygon_data(&ps.shape),
                &[
                    ("fill", &*theme.tree_fill.to_string()),
                    ("stroke", &*theme.tree_stroke.to_string()),
                    ("stroke-width", &*format!("{stroke_width}")),
                    ("stroke-linejoin", "round"),
                ],
            );
            if options.tree_titles {
                path = path.add(Title::new(format!(
                    "tree #{}, rotation: {}°, position: ({}, {})",
                    ps.id,
                    ps.rotation(),
                    ps.x(),
                    ps.y()
                )));
            }
            trees_group = trees_group.add(path);
        }
        trees_group
    };

    let square_group = {
        let mut square_group = Group::new().set("id", "bounding_square");
        if options.bounding_square && !packing.is_empty() {
            square_group = square_group.add(
                svg_util::data_to_path(
                    svg_util::rect_data(&square),
                    &[
                        ("fill", "none"),
                        ("stroke", &*theme.bounding_square_stroke.to_string()),
                        ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                        ("stroke-dasharray", &*format!("{}", 5.0 * stroke_width)),
                    ],
                )
                .add(Title::new(format!(
                    "bounding square, size: {:.1}, x_min: {:.1}, y_min: {:.1}",
                    square.width(),
                    square.x_min,
                    square.y_min
                ))),
            );
        }
        square_group
    };

    let label = Text::new(format!(
        "{title} trees: {}/{} | box: {:.1} | score: {:.2}",
        packing.n_placed(),
        packing.n_requested(),
        packing.bbox_size(),
        packing.score().unwrap_or(0.0)
    ))
    .set("x", vbox.x_min + vbox.width() * 0.01)
    .set("y", vbox.y_min + font_size as f64)
    .set("font-size", font_size)
    .set("font-family", "monospace")
    .set("fill", theme.label_fill.to_string());

    Document::new()
        .set(
            "viewBox",
            format!(
                "{} {} {} {}",
                vbox.x_min,
                vbox.y_min,
                vbox.width(),
                vbox.height()
            ),
        )
        .add(background)
        .add(trees_group)
        .add(square_group)
        .add(label)
}

/// Square of side [`Packing::bbox_size`] anchored at the minimum corner of the packing's bounding box.
/// Falls back to the bounding box of the template when nothing was placed.
pub fn enclosing_square(packing: &Packing) -> Rect {
    let bbox = packing.bbox().unwrap_or(packing.template().bbox());
    let side = bbox.square_side();
    Rect::new(bbox.x_min, bbox.y_min, bbox.x_min + side, bbox.y_min + side)
}
