// SVG chart rendering with plotters
use crate::domain::chart::{ChartKind, ChartSpec, SeriesData};
use plotters::{
    chart::{ChartBuilder, ChartContext, SeriesLabelPosition},
    coord::{Shift, types::RangedCoordf64},
    element::{Circle, PathElement, Pie, Rectangle, Text},
    prelude::{Cartesian2d, DrawingArea, IntoDrawingArea, SVGBackend},
    series::LineSeries,
    style::{
        BLACK, Color, IntoFont, RGBColor, TextStyle, WHITE,
        text_anchor::{HPos, Pos, VPos},
    },
};
use thiserror::Error;
use tracing::instrument;

type SvgArea<'b> = DrawingArea<SVGBackend<'b>, Shift>;
type CategoryChart<'a, 'b> = ChartContext<'a, SVGBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

const FONT: &str = "sans-serif";
const GREY: RGBColor = RGBColor(0x80, 0x80, 0x80);

/// Bars of one category fill this fraction of the slot between ticks.
const BAR_BAND: f64 = 0.7;

#[derive(Debug, Error)]
pub enum ChartRenderError {
    #[error("chart '{0}' has no data")]
    EmptyChart(String),

    #[error("invalid colour '{0}'")]
    InvalidColor(String),

    #[error("drawing failed: {0}")]
    Draw(String),
}

fn draw_error<E: std::fmt::Display>(e: E) -> ChartRenderError {
    ChartRenderError::Draw(e.to_string())
}

/// Parses `#rrggbb` into a plotters colour.
pub fn parse_color(hex: &str) -> Result<RGBColor, ChartRenderError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(ChartRenderError::InvalidColor(hex.to_string()));
    }

    let channel = |start: usize| {
        u8::from_str_radix(&digits[start..start + 2], 16)
            .map_err(|_| ChartRenderError::InvalidColor(hex.to_string()))
    };
    Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

fn series_color(series: &SeriesData, index: usize) -> Result<RGBColor, ChartRenderError> {
    series
        .color_at(index)
        .map(parse_color)
        .unwrap_or(Ok(BLACK))
}

/// Formats a value without a trailing `.0`, e.g. 18 -> "18", 101.5 -> "101.5"
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn category_label(categories: &[String], x: f64) -> String {
    let index = x.round();
    if (x - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    categories.get(index as usize).cloned().unwrap_or_default()
}

/// Value axis bounds covering every point, anchored at zero.
fn value_bounds(chart: &ChartSpec) -> (f64, f64) {
    let (low, high) = chart
        .series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.value))
        .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

    let span = if high > low { high - low } else { 1.0 };
    let headroom = if chart.value_suffix.is_some() { 0.2 } else { 0.1 };
    let low = if low < 0.0 { low - span * 0.1 } else { low };
    (low, high + span * headroom)
}

#[derive(Debug, Clone)]
pub struct SvgChartRenderer {
    width: u32,
}

impl Default for SvgChartRenderer {
    fn default() -> Self {
        Self { width: 720 }
    }
}

impl SvgChartRenderer {
    /// Draws the chart into a standalone SVG document.
    #[instrument(skip_all, fields(chart = %chart.id), level = "debug")]
    pub fn render(&self, chart: &ChartSpec) -> Result<String, ChartRenderError> {
        if chart.series.iter().all(|s| s.points.is_empty()) {
            return Err(ChartRenderError::EmptyChart(chart.id.clone()));
        }

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, chart.height)).into_drawing_area();
            root.fill(&WHITE).map_err(draw_error)?;

            match chart.kind {
                ChartKind::Line => draw_line_chart(&root, chart)?,
                ChartKind::Bar | ChartKind::GroupedBar => draw_bar_chart(&root, chart)?,
                ChartKind::Pie => draw_pie_chart(&root, chart, 0.0)?,
                ChartKind::Donut { hole } => draw_pie_chart(&root, chart, hole)?,
            }

            root.present().map_err(draw_error)?;
        }

        Ok(svg)
    }
}

fn build_category_chart<'a, 'b>(
    root: &'a SvgArea<'b>,
    chart: &ChartSpec,
) -> Result<CategoryChart<'a, 'b>, ChartRenderError> {
    // Category i sits at x = i; ticks that fall between categories get no label
    let slots = chart.categories().len().max(1);
    let x_range = -0.5..slots as f64 - 0.5;
    let (y_min, y_max) = chart.y_range.unwrap_or_else(|| value_bounds(chart));

    let mut ctx = ChartBuilder::on(root)
        .margin(12)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .caption(&chart.title, (FONT, 22).into_font())
        .build_cartesian_2d(x_range, y_min..y_max)
        .map_err(draw_error)?;

    let categories: Vec<String> = chart.categories().iter().map(|c| c.to_string()).collect();
    let format_x = |x: &f64| category_label(&categories, *x);
    let format_y = |y: &f64| format_value((*y * 100.0).round() / 100.0);

    let mut mesh = ctx.configure_mesh();
    mesh.disable_x_mesh()
        .x_labels(slots)
        .y_labels(6)
        .x_label_formatter(&format_x)
        .y_label_formatter(&format_y);
    if let Some(x_title) = &chart.x_title {
        mesh.x_desc(x_title.as_str());
    }
    if let Some(y_title) = &chart.y_title {
        mesh.y_desc(y_title.as_str());
    }
    mesh.draw().map_err(draw_error)?;

    Ok(ctx)
}

fn draw_legend<'a, 'b: 'a>(ctx: &mut CategoryChart<'a, 'b>, chart: &ChartSpec) -> Result<(), ChartRenderError> {
    if !chart.show_legend {
        return Ok(());
    }
    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()
        .map_err(draw_error)
}

fn draw_line_chart(root: &SvgArea<'_>, chart: &ChartSpec) -> Result<(), ChartRenderError> {
    let mut ctx = build_category_chart(root, chart)?;

    for series in &chart.series {
        let color = series_color(series, 0)?;
        let points: Vec<(f64, f64)> = series
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.value))
            .collect();

        ctx.draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(3)))
            .map_err(draw_error)?
            .label(series.name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x - 10, y), (x + 10, y)], color));

        ctx.draw_series(points.iter().map(|&(x, y)| Circle::new((x, y), 5, color.filled())))
            .map_err(draw_error)?;
    }

    draw_legend(&mut ctx, chart)
}

fn draw_bar_chart(root: &SvgArea<'_>, chart: &ChartSpec) -> Result<(), ChartRenderError> {
    let mut ctx = build_category_chart(root, chart)?;
    let width = BAR_BAND / chart.series.len().max(1) as f64;
    let label_style = TextStyle::from((FONT, 15).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
    // A single coloured series gets one legend entry per category
    let per_category = chart.kind == ChartKind::Bar;

    for (group, series) in chart.series.iter().enumerate() {
        let offset = -BAR_BAND / 2.0 + group as f64 * width;
        let mut bars = Vec::with_capacity(series.points.len());
        for (i, point) in series.points.iter().enumerate() {
            let left = i as f64 + offset;
            let color = series_color(series, i)?;
            let bar = Rectangle::new([(left, 0.0), (left + width, point.value)], color.filled());
            if per_category {
                ctx.draw_series(std::iter::once(bar))
                    .map_err(draw_error)?
                    .label(point.category.as_str())
                    .legend(move |(x, y)| legend_swatch(x, y, color));
            } else {
                bars.push(bar);
            }
        }

        if !per_category {
            let legend_color = series_color(series, 0)?;
            ctx.draw_series(bars)
                .map_err(draw_error)?
                .label(series.name.as_str())
                .legend(move |(x, y)| legend_swatch(x, y, legend_color));
        }

        if let Some(suffix) = &chart.value_suffix {
            ctx.draw_series(series.points.iter().enumerate().map(|(i, point)| {
                Text::new(
                    format!("{}{}", format_value(point.value), suffix),
                    (i as f64 + offset + width / 2.0, point.value),
                    label_style.clone(),
                )
            }))
            .map_err(draw_error)?;
        }
    }

    draw_legend(&mut ctx, chart)
}

fn legend_swatch(x: i32, y: i32, color: RGBColor) -> Rectangle<(i32, i32)> {
    Rectangle::new([(x - 6, y - 6), (x + 6, y + 6)], color.filled())
}

fn draw_pie_chart(root: &SvgArea<'_>, chart: &ChartSpec, hole: f64) -> Result<(), ChartRenderError> {
    let series = chart
        .series
        .first()
        .ok_or_else(|| ChartRenderError::EmptyChart(chart.id.clone()))?;

    let area = root
        .titled(&chart.title, (FONT, 22).into_font())
        .map_err(draw_error)?;
    let (width, height) = area.dim_in_pixel();
    let center = ((width / 2) as i32, (height / 2) as i32);
    let radius = f64::from(width.min(height)) * 0.33;

    let sizes = series.values();
    let colors = (0..sizes.len())
        .map(|i| series_color(series, i))
        .collect::<Result<Vec<_>, _>>()?;
    let labels: Vec<String> = if chart.show_legend {
        series.categories().iter().map(|c| c.to_string()).collect()
    } else {
        vec![String::new(); sizes.len()]
    };

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style((FONT, 15).into_font().color(&BLACK));
    if chart.show_legend {
        pie.percentages((FONT, 14).into_font().color(&WHITE));
    }
    if hole > 0.0 {
        pie.donut_hole(radius * hole);
    }
    area.draw(&pie).map_err(draw_error)?;

    if let Some(label) = &chart.center_label {
        let emphasis = colors.first().copied().unwrap_or(BLACK);
        let centered = Pos::new(HPos::Center, VPos::Center);
        let style = (FONT, (radius * 0.45) as u32).into_font().color(&emphasis).pos(centered);
        area.draw(&Text::new(label.text.as_str(), center, style))
            .map_err(draw_error)?;

        if let Some(caption) = &label.caption {
            let below = (center.0, center.1 + (radius * 0.35) as i32);
            let style = (FONT, 13).into_font().color(&GREY).pos(centered);
            area.draw(&Text::new(caption.as_str(), below, style))
                .map_err(draw_error)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::catalog::builders::{bar_chart, donut_chart, grouped_bar_chart, line_chart};
    use crate::application::catalog::section_layout;
    use crate::domain::section::SectionId;
    use chrono::NaiveDate;

    fn catalog_chart(section: SectionId, id: &str) -> ChartSpec {
        let layout = section_layout(section, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        layout.chart(id).unwrap().clone()
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#667eea").unwrap(), RGBColor(0x66, 0x7e, 0xea));
        assert_eq!(parse_color("800020").unwrap(), RGBColor(0x80, 0x00, 0x20));
        assert!(matches!(parse_color("#66"), Err(ChartRenderError::InvalidColor(_))));
        assert!(matches!(parse_color("#zzzzzz"), Err(ChartRenderError::InvalidColor(_))));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(188.0), "188");
        assert_eq!(format_value(101.5), "101.5");
        assert_eq!(format_value(-100.0), "-100");
    }

    #[test]
    fn test_category_label_only_on_ticks() {
        let categories = vec!["FY20".to_string(), "FY21".to_string()];
        assert_eq!(category_label(&categories, 1.0), "FY21");
        assert_eq!(category_label(&categories, 0.5), "");
        assert_eq!(category_label(&categories, -1.0), "");
        assert_eq!(category_label(&categories, 7.0), "");
    }

    #[test]
    fn test_value_bounds_include_negative_values() {
        let chart = line_chart("roi", "ROI", "ROI", &[("Phase 1", -100.0), ("Phase 4", 630.9)], "#764ba2");
        let (low, high) = value_bounds(&chart);
        assert!(low < -100.0);
        assert!(high > 630.9);
    }

    #[test]
    fn test_line_chart_svg_names_categories() {
        let chart = line_chart(
            "revenue-growth",
            "Revenue Growth Trajectory",
            "Revenue",
            &[("FY20", 0.0), ("FY21", 25.0), ("FY22", 80.0), ("FY23", 188.0)],
            "#667eea",
        );
        let svg = SvgChartRenderer::default().render(&chart).unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("Revenue Growth Trajectory"));
        for category in ["FY20", "FY21", "FY22", "FY23"] {
            assert!(svg.contains(category), "missing {category}");
        }
    }

    #[test]
    fn test_bar_value_labels() {
        let chart = bar_chart("share", "Market Share Growth", &[("2021", 18.0), ("2023", 21.0)], &["#800020"])
            .with_value_labels("%");
        let svg = SvgChartRenderer::default().render(&chart).unwrap();

        assert!(svg.contains("18%"));
        assert!(svg.contains("21%"));
    }

    #[test]
    fn test_grouped_bar_legend() {
        let chart = grouped_bar_chart(
            "cac-ltv",
            "CAC vs. LTV",
            &["Phase 1", "Phase 2"],
            &[("CAC", &[40.0, 20.0], "#764ba2"), ("LTV", &[500.0, 550.0], "#667eea")],
        );
        let svg = SvgChartRenderer::default().render(&chart).unwrap();

        assert!(svg.contains("CAC"));
        assert!(svg.contains("LTV"));
    }

    #[test]
    fn test_donut_center_label() {
        let chart = donut_chart(
            "dividend-yield",
            "Dividend Yield",
            &[("Dividend yield", 0.93), ("Remainder", 99.07)],
            &["#800020", "#F0F0F0"],
            0.6,
        )
        .with_center_label("0.93%", Some("Consistent returns"));
        let svg = SvgChartRenderer::default().render(&chart).unwrap();

        assert!(svg.contains("0.93%"));
        assert!(svg.contains("Consistent returns"));
    }

    #[test]
    fn test_users_under_30_donut_names_slices() {
        let chart = catalog_chart(SectionId::Telda, "users-under-30");
        let svg = SvgChartRenderer::default().render(&chart).unwrap();

        assert!(svg.contains("Users Under 30"));
        assert!(svg.contains("Other Users"));
        assert!(svg.contains("70%"));
    }

    #[test]
    fn test_ratio_donut_hides_slice_labels() {
        let chart = catalog_chart(SectionId::AmericanExpress, "dividend-yield");
        let svg = SvgChartRenderer::default().render(&chart).unwrap();

        assert!(!svg.contains("Remainder"));
        assert!(svg.contains("0.93%"));
    }

    #[test]
    fn test_record_growth_legend_lists_each_bar() {
        let chart = catalog_chart(SectionId::AmericanExpress, "record-growth");
        let svg = SvgChartRenderer::default().render(&chart).unwrap();

        // once on the axis, once in the legend
        assert!(svg.matches("Net Income").count() >= 2);
        assert!(svg.matches("Revenue").count() >= 2);
    }

    #[test]
    fn test_render_is_deterministic() {
        let chart = bar_chart("growth", "Record Growth in (B$)", &[("Revenue", 65.9), ("Net Income", 10.1)], &["#722F37", "#A85751"]);
        let renderer = SvgChartRenderer::default();
        assert_eq!(renderer.render(&chart).unwrap(), renderer.render(&chart).unwrap());
    }

    #[test]
    fn test_empty_chart_is_rejected() {
        let chart = ChartSpec::new("empty", "Empty", ChartKind::Line, Vec::new());
        assert!(matches!(
            SvgChartRenderer::default().render(&chart),
            Err(ChartRenderError::EmptyChart(id)) if id == "empty"
        ));
    }
}
