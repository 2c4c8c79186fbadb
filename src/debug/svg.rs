use std::{fmt::{self, Write}, io, path};

use svg_fmt::*;

use crate::{debug, idx::{Idx, SliceExt}, point::Point, segment::Segment, trapezoid::Trapezoid, trapezoidation::TrapezoidationStructure};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum SvgOutputLevel {
    None,
    ResultOnly,
    MajorSteps,
    AllSteps,
}

pub(crate) struct SvgOutput<'a> {
    pub context: &'a SvgContext,
    pub style: SvgTriangulationStyle,
    content: String,
}

impl<'a> SvgOutput<'a> {
    pub fn new(context: &'a SvgContext, style: SvgTriangulationStyle) -> Self {
        Self {
            context,
            style,
            content: String::new(),
        }
    }

    pub fn append_element<State, E: SvgElement<State>>(&mut self, element: &E, state: &State) -> fmt::Result {
        element.write_svg(self, state)
    }

    /// Draw the contours, the live trapezoids and the segments
    pub fn append_trapezoidation<T: TrapezoidationStructure>(&mut self, trapezoidation: &T) -> fmt::Result {
        let cs = trapezoidation.cs();
        for contour in cs.contours() {
            let points: Vec<[f32; 2]> = contour.segments()
                .map(|si| cs.point(cs.ss()[si].start()))
                .map(|p| [p.x as f32, p.y as f32])
                .collect();
            writeln!(self, "{}",
                polygon(&points)
                    .stroke(Stroke::Color(rgb(255, 0, 255), self.context.percent(0.3)))
            )?;
        }
        for ti in trapezoidation.ts().iter_index() {
            if trapezoidation.ts()[ti].is_live() {
                self.append_element(&ti, trapezoidation)?;
            }
        }
        for si in cs.ss().iter_index() {
            self.append_element(&si, trapezoidation)?;
        }
        for vi in 0..cs.points().len() {
            self.append_element(&VertexWrap(vi), trapezoidation)?;
        }
        Ok(())
    }

    pub fn save<P: AsRef<path::Path>>(self, file_name: P) -> io::Result<()> {
        use std::io::Write;

        let path = self.context.output_path.join(file_name);
        let f = std::fs::File::create(path)?;
        let mut w = io::BufWriter::new(&f);

        writeln!(w, "<svg viewBox=\"{}, {}, {}, {}\" xmlns=\"http://www.w3.org/2000/svg\">", self.context.view_x_min, self.context.view_y_min, self.context.view_w(), self.context.view_h())?;
        writeln!(w, "{}", self.content)?;
        writeln!(w, "</svg>")?;
        Ok(())
    }
}

impl<'a> fmt::Write for SvgOutput<'a> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.content.write_str(s)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SvgElementStyle {
    Hide,
    Standard,
    Highlight,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct SvgTriangulationStyle {
    vertex: Option<usize>,
    segment: Option<Idx<Segment>>,
    trapezoid: Option<Idx<Trapezoid>>,
}

impl SvgTriangulationStyle {
    pub fn highlight_segment(si: Idx<Segment>) -> Self {
        Self {
            segment: Some(si),
            ..Self::default()
        }
    }

    fn evaluate<T: PartialEq>(highlighted: Option<T>, x: T) -> SvgElementStyle {
        if highlighted == Some(x) {
            SvgElementStyle::Highlight
        } else {
            SvgElementStyle::Standard
        }
    }

    pub fn get_v_style(&self, vi: usize) -> SvgElementStyle {
        Self::evaluate(self.vertex, vi)
    }

    pub fn get_s_style(&self, si: Idx<Segment>) -> SvgElementStyle {
        Self::evaluate(self.segment, si)
    }

    pub fn get_t_style(&self, ti: Idx<Trapezoid>) -> SvgElementStyle {
        Self::evaluate(self.trapezoid, ti)
    }
}

pub(crate) struct SvgContext {
    pub output_path: path::PathBuf,
    pub output_level: SvgOutputLevel,
    pub view_x_min: f32,
    pub view_x_max: f32,
    pub view_y_min: f32,
    pub view_y_max: f32,
    pub show_labels: bool,
}

impl SvgContext {
    /// A context framing `points`, or `None` unless svg output is enabled through the environment
    pub fn from_env(points: &[Point]) -> Option<Self> {
        let output_path = debug::env::svg::output_path()?;
        let output_level = debug::env::svg::output_level();
        let show_labels = debug::env::svg::show_labels();

        if output_level == SvgOutputLevel::None {
            return None;
        }

        let mut view_x_min = f32::MAX;
        let mut view_x_max = f32::MIN;
        let mut view_y_min = f32::MAX;
        let mut view_y_max = f32::MIN;
        for p in points {
            view_x_min = view_x_min.min(p.x as f32);
            view_x_max = view_x_max.max(p.x as f32);
            view_y_min = view_y_min.min(p.y as f32);
            view_y_max = view_y_max.max(p.y as f32);
        }

        let w = view_x_max - view_x_min;
        let h = view_y_max - view_y_min;
        let margin_scale = 0.1;
        view_x_min -= w * margin_scale;
        view_x_max += w * margin_scale;
        view_y_min -= h * margin_scale;
        view_y_max += h * margin_scale;

        Some(Self {
            output_path,
            output_level,
            view_x_min,
            view_x_max,
            view_y_min,
            view_y_max,
            show_labels,
        })
    }

    pub fn view_w(&self) -> f32 { self.view_x_max - self.view_x_min }
    pub fn view_h(&self) -> f32 { self.view_y_max - self.view_y_min }

    pub fn view_min_size(&self) -> f32 { self.view_w().min(self.view_h()) }

    pub fn percent(&self, p: f32) -> f32 { self.view_min_size() * p / 100.0 }
}

pub(crate) trait SvgElement<State = ()> {
    fn write_svg(&self, svg_output: &mut SvgOutput<'_>, state: &State) -> fmt::Result;
}

// svg_fmt is missing a function for Circle
pub(crate) fn circle(x: f32, y: f32, r: f32) -> Circle {
    Circle {
        x,
        y,
        radius: r,
        style: Style::default(),
    }
}

fn x_intercept(lo: Point, hi: Point, y: f32) -> f32 {
    let y_diff = (hi.y - lo.y) as f32;
    if y_diff != 0.0 {
        let slope = (hi.x - lo.x) as f32 / y_diff;
        lo.x as f32 + slope * (y - lo.y as f32)
    } else {
        lo.x as f32
    }
}

struct VertexWrap(usize);

impl<S: TrapezoidationStructure> SvgElement<S> for VertexWrap {
    fn write_svg(&self, svg_output: &mut SvgOutput<'_>, state: &S) -> fmt::Result {
        let p = state.cs().point(self.0);
        let color = match svg_output.style.get_v_style(self.0) {
            SvgElementStyle::Hide => return Ok(()),
            SvgElementStyle::Standard => blue(),
            SvgElementStyle::Highlight => rgb(255, 126, 0),
        };
        let r = svg_output.context.percent(0.5);
        writeln!(svg_output, "{}",
            circle(p.x as f32, p.y as f32, r)
                .fill(Fill::Color(color))
        )?;

        if svg_output.context.show_labels {
            let gap = svg_output.context.percent(1.0);
            let size = svg_output.context.percent(1.0);
            writeln!(svg_output, "{}",
                text(p.x as f32 - gap, p.y as f32, format!("v{}", self.0))
                    .color(black())
                    .align(Align::Right)
                    .size(size)
            )?;
        }
        Ok(())
    }
}

impl<S: TrapezoidationStructure> SvgElement<S> for Idx<Segment> {
    fn write_svg(&self, svg_output: &mut SvgOutput<'_>, state: &S) -> fmt::Result {
        let (start, end) = state.cs().segment_points(*self);
        let width = svg_output.context.percent(0.5);
        let color = match svg_output.style.get_s_style(*self) {
            SvgElementStyle::Hide => return Ok(()),
            SvgElementStyle::Standard => red(),
            SvgElementStyle::Highlight => rgb(255, 126, 0),
        };
        writeln!(svg_output, "{}",
            line_segment(start.x as f32, start.y as f32, end.x as f32, end.y as f32)
                .color(color)
                .width(width)
        )
    }
}

impl<S: TrapezoidationStructure> SvgElement<S> for Idx<Trapezoid> {
    fn write_svg(&self, svg_output: &mut SvgOutput<'_>, state: &S) -> fmt::Result {
        let width = svg_output.context.percent(0.1);
        let color = match svg_output.style.get_t_style(*self) {
            SvgElementStyle::Hide => return Ok(()),
            SvgElementStyle::Standard => rgb(255, 255, 0),
            SvgElementStyle::Highlight => rgb(255, 126, 0),
        };

        let t = &state.ts()[*self];
        let y_min = t.lo.map_or(svg_output.context.view_y_min, |lo| lo.y as f32);
        let y_max = t.hi.map_or(svg_output.context.view_y_max, |hi| hi.y as f32);
        let y = (y_max + y_min) / 2.0;

        let side_xs = |side: Option<Idx<Segment>>, fallback: f32| match side {
            Some(si) => {
                let (lo, hi) = state.segment_lo_hi_points(si);
                (x_intercept(lo, hi, y), x_intercept(lo, hi, y_max), x_intercept(lo, hi, y_min))
            }
            None => (fallback, fallback, fallback),
        };
        let (x_min, x_topleft, x_bottomleft) = side_xs(t.left, svg_output.context.view_x_min);
        let (x_max, x_topright, x_bottomright) = side_xs(t.right, svg_output.context.view_x_max);
        let x = (x_max + x_min) / 2.0;

        writeln!(svg_output, "{}",
            line_segment(x_topleft, y_max, x_bottomright, y_min)
                .color(color)
                .width(width)
        )?;
        writeln!(svg_output, "{}",
            line_segment(x_bottomleft, y_min, x_topright, y_max)
                .color(color)
                .width(width)
        )?;
        if svg_output.context.show_labels {
            let size = svg_output.context.percent(1.5);
            writeln!(svg_output, "{}",
                text(x, y, self.to_string())
                    .size(size)
                    .align(Align::Center)
            )?;
        }
        Ok(())
    }
}
