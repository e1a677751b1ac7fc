//! Standalone SVG output for a laid-out [`HeatMap`].

use crate::{
    axis::{Axis, Orientation},
    layout::HeatMap,
    tooltip::round1,
};
use std::fmt::Write;

const TICK_SIZE: f64 = 6.0;
const AXIS_COLOR: &str = "currentColor";

/// Escape text for use inside XML content or a double-quoted attribute.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0 + 0.0;
    format!("{}", rounded)
}

// Writing into a String cannot fail, so the fmt::Results below are dropped.
fn write_axis(out: &mut String, axis: &Axis) {
    let (e0, e1) = axis.extent;
    match axis.orientation {
        Orientation::Bottom => {
            let _ = writeln!(
                out,
                r#"<g id="{}" transform="translate(0,{})" font-size="10" text-anchor="middle">"#,
                axis.id,
                num(axis.offset)
            );
            let _ = writeln!(
                out,
                r#"<path class="domain" stroke="{}" d="M{},0H{}"/>"#,
                AXIS_COLOR,
                num(e0),
                num(e1)
            );
            for tick in &axis.ticks {
                let _ = writeln!(
                    out,
                    r#"<g class="tick" transform="translate({},0)"><line stroke="{}" y2="{}"/><text fill="{}" y="9" dy="0.71em">{}</text></g>"#,
                    num(tick.position),
                    AXIS_COLOR,
                    TICK_SIZE,
                    AXIS_COLOR,
                    escape(&tick.label)
                );
            }
        }
        Orientation::Left => {
            let _ = writeln!(
                out,
                r#"<g id="{}" transform="translate({},0)" font-size="10" text-anchor="end">"#,
                axis.id,
                num(axis.offset)
            );
            let _ = writeln!(
                out,
                r#"<path class="domain" stroke="{}" d="M0,{}V{}"/>"#,
                AXIS_COLOR,
                num(e0),
                num(e1)
            );
            for tick in &axis.ticks {
                let _ = writeln!(
                    out,
                    r#"<g class="tick" transform="translate(0,{})"><line stroke="{}" x2="-{}"/><text fill="{}" x="-9" dy="0.32em">{}</text></g>"#,
                    num(tick.position),
                    AXIS_COLOR,
                    TICK_SIZE,
                    AXIS_COLOR,
                    escape(&tick.label)
                );
            }
        }
    }
    out.push_str("</g>\n");
}

/// Render the heat map as an SVG document.
pub fn render_svg(heat_map: &HeatMap) -> String {
    let dims = &heat_map.dimensions;
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = num(dims.width),
        h = num(dims.height)
    );
    let _ = writeln!(
        out,
        r#"<text id="title" x="{}" y="{}" text-anchor="middle" font-size="20">{}</text>"#,
        num(dims.width / 2.0),
        num(dims.padding / 2.0),
        escape(&heat_map.title)
    );
    let _ = writeln!(
        out,
        r#"<text id="description" x="{}" y="{}" text-anchor="middle" font-size="14">{}</text>"#,
        num(dims.width / 2.0),
        num(dims.padding / 2.0 + 25.0),
        escape(&heat_map.description)
    );

    write_axis(&mut out, &heat_map.x_axis);
    write_axis(&mut out, &heat_map.y_axis);

    out.push_str("<g class=\"cells\">\n");
    for cell in &heat_map.cells {
        let _ = writeln!(
            out,
            r#"<rect class="cell" data-month="{}" data-year="{}" data-temp="{}" fill="{}" x="{}" y="{}" width="{}" height="{}"><title>{}</title></rect>"#,
            cell.month,
            cell.year,
            round1(cell.temperature),
            escape(&cell.fill),
            num(cell.x),
            num(cell.y),
            num(cell.width),
            num(cell.height),
            escape(&cell.tooltip.to_string())
        );
    }
    out.push_str("</g>\n");

    let legend = &heat_map.legend;
    let _ = writeln!(out, r#"<g id="legend">"#);
    for swatch in &legend.swatches {
        let _ = writeln!(
            out,
            r#"<rect class="legend-swatch" fill="{}" x="{}" y="{}" width="{}" height="{}"/>"#,
            escape(&swatch.fill),
            num(legend.x),
            num(swatch.y),
            num(legend.swatch_width),
            num(swatch.height)
        );
    }
    write_axis(&mut out, &legend.axis);
    out.push_str("</g>\n");

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartConfig;
    use gtv_data::{Dataset, VarianceRecord};

    fn sample() -> HeatMap {
        let dataset = Dataset::new(
            8.66,
            vec![
                VarianceRecord::new(1753, 1, -1.366),
                VarianceRecord::new(1754, 12, 0.5),
            ],
        );
        HeatMap::layout(&dataset, &ChartConfig::default())
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_num() {
        assert_eq!(num(80.0), "80");
        assert_eq!(num(483.3333333), "483.33");
        assert_eq!(num(-0.001), "0");
    }

    #[test]
    fn test_render_svg_structure() {
        let svg = render_svg(&sample());
        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"id="x-axis""#));
        assert!(svg.contains(r#"id="y-axis""#));
        assert!(svg.contains(r#"id="legend""#));
        assert!(svg.contains(r#"id="title""#));
        assert_eq!(svg.matches(r#"class="cell""#).count(), 2);
        assert_eq!(svg.matches(r#"class="legend-swatch""#).count(), 5);
    }

    #[test]
    fn test_render_svg_cell_tags() {
        let svg = render_svg(&sample());
        assert!(svg.contains(r#"data-month="0" data-year="1753" data-temp="7.3""#));
        assert!(svg.contains(r#"data-month="11" data-year="1754""#));
        assert!(svg.contains("<title>January - 1753\n7.3℃\n-1.4℃</title>"));
        assert!(svg.contains(">January</text>"));
        assert!(svg.contains(">December</text>"));
    }

    #[test]
    fn test_render_svg_empty() {
        let heat_map = HeatMap::layout(&Dataset::default(), &ChartConfig::default());
        let svg = render_svg(&heat_map);
        assert_eq!(svg.matches(r#"class="cell""#).count(), 0);
        assert!(svg.contains(r#"id="x-axis""#));
    }
}
