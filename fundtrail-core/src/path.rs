//! SVG path geometry for the map route.
//!
//! Parses the subset of path data the route artwork uses (move, line, cubic
//! Bézier and close, absolute or relative) and flattens it into an
//! arc-length table so positions can be computed without DOM geometry.

use std::str::FromStr;

use thiserror::Error;

/// Route overlay drawn on the map, in a `0 0 100 100` viewBox.
pub const MAP_ROUTE_PATH: &str = "M 95 28 C 93 32, 91 38, 89 42 C 87 52, 86 58, 85 62 \
C 82 58, 78 45, 73 38 C 66 35, 58 40, 52 45 C 48 48, 45 52, 42 55 \
C 38 50, 33 42, 28 38 C 23 34, 20 32, 17 30 C 12 32, 9 33, 7 35 \
C 5 40, 4 45, 3 48";

/// Samples taken per curve when building the length table.
const CURVE_SAMPLES: usize = 48;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("path data is empty")]
    Empty,
    #[error("path must start with a move command")]
    MissingMoveTo,
    #[error("unsupported path command '{0}'")]
    UnsupportedCommand(char),
    #[error("invalid number '{0}' in path data")]
    InvalidNumber(String),
    #[error("command '{0}' is missing arguments")]
    MissingArguments(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            (other.x - self.x).mul_add(t, self.x),
            (other.y - self.y).mul_add(t, self.y),
        )
    }

    fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Segment {
    Line(Point, Point),
    Cubic(Point, Point, Point, Point),
}

impl Segment {
    fn point_at(&self, t: f64) -> Point {
        match *self {
            Self::Line(a, b) => a.lerp(b, t),
            Self::Cubic(p0, p1, p2, p3) => {
                let mt = 1.0 - t;
                let a = mt * mt * mt;
                let b = 3.0 * mt * mt * t;
                let c = 3.0 * mt * t * t;
                let d = t * t * t;
                Point::new(
                    a * p0.x + b * p1.x + c * p2.x + d * p3.x,
                    a * p0.y + b * p1.y + c * p2.y + d * p3.y,
                )
            }
        }
    }

    const fn samples(&self) -> usize {
        match self {
            Self::Line(..) => 1,
            Self::Cubic(..) => CURVE_SAMPLES,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Command(char),
    Number(f64),
}

fn tokenize(data: &str) -> Result<Vec<Token>, PathError> {
    let mut tokens = Vec::new();
    let mut number = String::new();

    let flush = |number: &mut String, tokens: &mut Vec<Token>| -> Result<(), PathError> {
        if !number.is_empty() {
            let value = number
                .parse::<f64>()
                .map_err(|_| PathError::InvalidNumber(number.clone()))?;
            tokens.push(Token::Number(value));
            number.clear();
        }
        Ok(())
    };

    for ch in data.chars() {
        match ch {
            '0'..='9' | '.' => number.push(ch),
            '-' | '+' => {
                // A sign starts a new number unless it follows an exponent.
                if !number.ends_with(['e', 'E']) {
                    flush(&mut number, &mut tokens)?;
                }
                number.push(ch);
            }
            'e' | 'E' if !number.is_empty() => number.push(ch),
            c if c.is_whitespace() || c == ',' => flush(&mut number, &mut tokens)?,
            c if c.is_ascii_alphabetic() => {
                flush(&mut number, &mut tokens)?;
                tokens.push(Token::Command(c));
            }
            other => return Err(PathError::UnsupportedCommand(other)),
        }
    }
    flush(&mut number, &mut tokens)?;
    Ok(tokens)
}

/// Parsed path with a cumulative arc-length table.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePath {
    segments: Vec<Segment>,
    /// `(cumulative length, segment index, t)` at every sample point.
    table: Vec<(f64, usize, f64)>,
}

impl RoutePath {
    /// Parse SVG path data.
    ///
    /// # Errors
    ///
    /// Returns [`PathError`] when the data is empty, does not start with a
    /// move, uses commands other than `M L C Z`, or has malformed arguments.
    pub fn parse(data: &str) -> Result<Self, PathError> {
        let tokens = tokenize(data)?;
        if tokens.is_empty() {
            return Err(PathError::Empty);
        }
        if !matches!(tokens.first(), Some(Token::Command('M' | 'm'))) {
            return Err(PathError::MissingMoveTo);
        }

        let mut segments = Vec::new();
        let mut current = Point::default();
        let mut subpath_start = Point::default();
        let mut idx = 0;

        while idx < tokens.len() {
            let Token::Command(cmd) = tokens[idx] else {
                return Err(PathError::InvalidNumber(format!("{:?}", tokens[idx])));
            };
            idx += 1;
            let args: Vec<f64> = tokens[idx..]
                .iter()
                .map_while(|t| match t {
                    Token::Number(n) => Some(*n),
                    Token::Command(_) => None,
                })
                .collect();
            idx += args.len();
            let relative = cmd.is_ascii_lowercase();

            match cmd.to_ascii_uppercase() {
                'M' => {
                    if args.len() < 2 || args.len() % 2 != 0 {
                        return Err(PathError::MissingArguments(cmd));
                    }
                    for (n, pair) in args.chunks_exact(2).enumerate() {
                        let target = if relative {
                            current.offset(pair[0], pair[1])
                        } else {
                            Point::new(pair[0], pair[1])
                        };
                        if n == 0 {
                            subpath_start = target;
                        } else {
                            segments.push(Segment::Line(current, target));
                        }
                        current = target;
                    }
                }
                'L' => {
                    if args.is_empty() || args.len() % 2 != 0 {
                        return Err(PathError::MissingArguments(cmd));
                    }
                    for pair in args.chunks_exact(2) {
                        let target = if relative {
                            current.offset(pair[0], pair[1])
                        } else {
                            Point::new(pair[0], pair[1])
                        };
                        segments.push(Segment::Line(current, target));
                        current = target;
                    }
                }
                'C' => {
                    if args.is_empty() || args.len() % 6 != 0 {
                        return Err(PathError::MissingArguments(cmd));
                    }
                    for c in args.chunks_exact(6) {
                        let base = if relative { current } else { Point::default() };
                        let p1 = base.offset(c[0], c[1]);
                        let p2 = base.offset(c[2], c[3]);
                        let p3 = base.offset(c[4], c[5]);
                        segments.push(Segment::Cubic(current, p1, p2, p3));
                        current = p3;
                    }
                }
                'Z' => {
                    if current != subpath_start {
                        segments.push(Segment::Line(current, subpath_start));
                    }
                    current = subpath_start;
                }
                _ => return Err(PathError::UnsupportedCommand(cmd)),
            }
        }

        Ok(Self::from_segments(segments, subpath_start))
    }

    fn from_segments(segments: Vec<Segment>, origin: Point) -> Self {
        let mut table = Vec::new();
        let mut total = 0.0;
        let mut prev = segments.first().map_or(origin, |s| s.point_at(0.0));
        table.push((0.0, 0, 0.0));

        for (seg_idx, segment) in segments.iter().enumerate() {
            let steps = segment.samples();
            for step in 1..=steps {
                let t = crate::numbers::usize_to_f64(step) / crate::numbers::usize_to_f64(steps);
                let point = segment.point_at(t);
                total += prev.distance(point);
                table.push((total, seg_idx, t));
                prev = point;
            }
        }

        Self { segments, table }
    }

    /// The built-in map route.
    ///
    /// # Errors
    ///
    /// Propagates [`PathError`]; the built-in data always parses.
    pub fn map_route() -> Result<Self, PathError> {
        Self::parse(MAP_ROUTE_PATH)
    }

    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.table.last().map_or(0.0, |entry| entry.0)
    }

    #[must_use]
    pub fn start(&self) -> Point {
        self.point_at_length(0.0)
    }

    #[must_use]
    pub fn end(&self) -> Point {
        self.point_at_length(self.total_length())
    }

    /// Point at arc length `length`, clamped to the path.
    #[must_use]
    pub fn point_at_length(&self, length: f64) -> Point {
        let Some(first) = self.segments.first() else {
            return Point::default();
        };
        let total = self.total_length();
        if total <= 0.0 || !length.is_finite() || length <= 0.0 {
            return first.point_at(0.0);
        }
        let length = length.min(total);

        let upper = self
            .table
            .partition_point(|entry| entry.0 < length)
            .min(self.table.len() - 1);
        if upper == 0 {
            return first.point_at(0.0);
        }
        let (len_hi, seg_hi, t_hi) = self.table[upper];
        let (len_lo, seg_lo, t_lo) = self.table[upper - 1];
        // Samples straddle a segment boundary only at t == 0 of the upper one.
        let t_lo = if seg_lo == seg_hi { t_lo } else { 0.0 };
        let span = len_hi - len_lo;
        let frac = if span > 0.0 { (length - len_lo) / span } else { 0.0 };
        self.segments[seg_hi].point_at((t_hi - t_lo).mul_add(frac, t_lo))
    }

    /// Point `percent` of the way along the path.
    #[must_use]
    pub fn point_at_percent(&self, percent: f64) -> Point {
        self.point_at_length(self.total_length() * percent.clamp(0.0, 100.0) / 100.0)
    }
}

impl FromStr for RoutePath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn straight_lines_measure_exactly() {
        let path = RoutePath::parse("M0,0 L30,40 l0,-40").unwrap();
        assert!(close(path.total_length(), 90.0, 1e-9));
        let mid = path.point_at_length(25.0);
        assert!(close(mid.x, 15.0, 1e-9) && close(mid.y, 20.0, 1e-9));
        let on_second = path.point_at_length(70.0);
        assert!(close(on_second.x, 30.0, 1e-9) && close(on_second.y, 20.0, 1e-9));
    }

    #[test]
    fn lengths_are_clamped() {
        let path = RoutePath::parse("M 10 10 L 20 10").unwrap();
        assert_eq!(path.point_at_length(-5.0), Point::new(10.0, 10.0));
        assert_eq!(path.point_at_length(f64::NAN), Point::new(10.0, 10.0));
        let end = path.point_at_length(1_000.0);
        assert!(close(end.x, 20.0, 1e-9));
    }

    #[test]
    fn map_route_runs_east_to_west() {
        let route = RoutePath::map_route().unwrap();
        let start = route.start();
        let end = route.end();
        assert!(close(start.x, 95.0, 1e-9) && close(start.y, 28.0, 1e-9));
        assert!(close(end.x, 3.0, 1e-6) && close(end.y, 48.0, 1e-6));
        assert!(route.total_length() > 92.0);
        let halfway = route.point_at_percent(50.0);
        assert!(halfway.x < start.x && halfway.x > end.x);
    }

    #[test]
    fn cubic_length_approximates_straight_control_polygon() {
        // Collinear control points: the curve is the straight segment.
        let path = RoutePath::parse("M0 0 C 10 0, 20 0, 30 0").unwrap();
        assert!(close(path.total_length(), 30.0, 1e-6));
    }

    #[test]
    fn close_command_returns_to_start() {
        let path = RoutePath::parse("M0 0 L 3 0 L 3 4 Z").unwrap();
        assert!(close(path.total_length(), 12.0, 1e-9));
    }

    #[test]
    fn exponents_and_implicit_separators_tokenize() {
        let path = RoutePath::parse("M1e1-5L20-5").unwrap();
        assert!(close(path.start().x, 10.0, 1e-9));
        assert!(close(path.start().y, -5.0, 1e-9));
        assert!(close(path.total_length(), 10.0, 1e-9));
    }

    #[test]
    fn malformed_paths_are_rejected() {
        assert_eq!(RoutePath::parse("   "), Err(PathError::Empty));
        assert_eq!(RoutePath::parse("L 1 2"), Err(PathError::MissingMoveTo));
        assert_eq!(RoutePath::parse("M 1 2 Q 1 2 3 4"), Err(PathError::UnsupportedCommand('Q')));
        assert_eq!(RoutePath::parse("M 1 2 C 1 2 3"), Err(PathError::MissingArguments('C')));
        assert!(matches!(RoutePath::parse("M 1..2 3"), Err(PathError::InvalidNumber(_))));
    }
}
