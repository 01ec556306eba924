//! The recursive-descent parser for the scene language.
//!
//! A scene source is a flat sequence of declarations, always starting with
//! `size`, followed by any mix of `color`, shape declarations (`elli`,
//! `circ`, `rect`, `tri`, `shift`, `rot`, `union`, `diff`) and `fill`
//! instructions. The parser makes a single forward pass: every alternative
//! is decided by the current word or by a one-character lookahead, so no
//! backtracking is ever needed.
//!
//! Declared names go into per-namespace symbol tables as soon as their
//! declaration completes, and references are resolved against those tables
//! immediately, which rules out forward references by construction.
//!
//! On failure, every production layer re-raises the inner error with its
//! own name appended, so the final message narrates the grammar path, e.g.
//! `invalid character z -> invalid number -> invalid circle declaration`.

use std::sync::Arc;

use ahash::AHashMap;
use log::debug;

use crate::color::Color;
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind};
use crate::geometry::Point;
use crate::scene::{Fill, Scene};
use crate::shape::{
    Circle, Difference, Ellipse, Rectangle, Rotation, Shape, Shift, Triangle, Union,
};

/// Parse a scene source into a [`Scene`].
///
/// # Examples
///
/// ```
/// use painton::parser;
///
/// let scene = parser::parse("
///     size 16 16
///     color red {1 0 0}
///     circ dot {8 8} 5
///     fill dot red
/// ")?;
/// assert_eq!(scene.width(), 16);
/// assert_eq!(scene.fills().len(), 1);
/// # Ok::<(), painton::error::ParseError>(())
/// ```
pub fn parse(source: &str) -> Result<Scene, ParseError> {
    Parser::new(source).run()
}

struct Parser {
    cursor: Cursor,
    colors: AHashMap<String, Color>,
    shapes: AHashMap<String, Arc<Shape>>,
    fills: Vec<Fill>,
}

impl Parser {
    fn new(source: &str) -> Self {
        Self {
            cursor: Cursor::new(source),
            colors: AHashMap::new(),
            shapes: AHashMap::new(),
            fills: Vec::new(),
        }
    }

    /// Drive the full parse and attach position and caret information to
    /// whatever error escapes.
    fn run(mut self) -> Result<Scene, ParseError> {
        match self.file() {
            Ok(scene) => Ok(scene),
            Err(err) => {
                let (line, column) = self.cursor.anchor();
                Err(err.at(line, column, self.cursor.anchor_text().to_string()))
            }
        }
    }

    fn file(&mut self) -> Result<Scene, ParseError> {
        let word = self.cursor.next_word();
        if word != "size" {
            return Err(ParseErrorKind::ExpectedKeyword { expected: "size", found: word }.into());
        }

        let (width, height) = self.size().map_err(|e| e.chain("size declaration"))?;

        loop {
            let word = self.cursor.next_word();

            match word.as_str() {
                "color" => self.color_decl().map_err(|e| e.chain("color declaration"))?,
                "elli" => self.ellipse_decl().map_err(|e| e.chain("ellipse declaration"))?,
                "circ" => self.circle_decl().map_err(|e| e.chain("circle declaration"))?,
                "rect" => self.rectangle_decl().map_err(|e| e.chain("rectangle declaration"))?,
                "tri" => self.triangle_decl().map_err(|e| e.chain("triangle declaration"))?,
                "shift" => self.shift_decl().map_err(|e| e.chain("shift declaration"))?,
                "rot" => self.rotation_decl().map_err(|e| e.chain("rotation declaration"))?,
                "union" => self.union_decl().map_err(|e| e.chain("union declaration"))?,
                "diff" => self.difference_decl().map_err(|e| e.chain("difference declaration"))?,
                "fill" => self.fill_decl().map_err(|e| e.chain("fill declaration"))?,
                "" => break,
                _ => {
                    return Err(ParseErrorKind::ExpectedKeyword {
                        expected: "declaration",
                        found: word,
                    }
                    .into());
                }
            }
        }

        debug!(
            "parsed scene: {} colors, {} shapes, {} fills",
            self.colors.len(),
            self.shapes.len(),
            self.fills.len()
        );

        Ok(Scene::new(
            width,
            height,
            std::mem::take(&mut self.colors),
            std::mem::take(&mut self.shapes),
            std::mem::take(&mut self.fills),
        ))
    }

    // ----- declarations ---------------------------------------------------

    fn size(&mut self) -> Result<(u32, u32), ParseError> {
        let width = self.canvas_extent("width")?;
        let height = self.canvas_extent("height")?;

        Ok((width, height))
    }

    /// One canvas dimension: a non-negative integer value (a trailing `.0`
    /// fraction is tolerated, anything else is rejected).
    fn canvas_extent(&mut self, dimension: &'static str) -> Result<u32, ParseError> {
        let n = self.number()?;

        if n < 0.0 || n.fract() != 0.0 || n > f64::from(u32::MAX) {
            return Err(ParseErrorKind::OutOfRange(format!(
                "expected positive integer {dimension}, got {n}"
            ))
            .into());
        }

        Ok(n as u32)
    }

    /// A number that must not be negative: a radius, a width, a height.
    fn positive_number(&mut self, what: &'static str) -> Result<f64, ParseError> {
        let n = self.number()?;

        if n < 0.0 {
            return Err(
                ParseErrorKind::OutOfRange(format!("expected positive {what}, got {n}")).into()
            );
        }

        Ok(n)
    }

    fn color_decl(&mut self) -> Result<(), ParseError> {
        let name = self.fresh_color_name()?;
        let color = self.color_expr()?;

        self.colors.insert(name, color);
        Ok(())
    }

    fn ellipse_decl(&mut self) -> Result<(), ParseError> {
        let name = self.fresh_shape_name()?;
        let center = self.point()?;
        let a = self.positive_number("semi-major radius")?;
        let b = self.positive_number("semi-minor radius")?;

        if a < b {
            return Err(ParseErrorKind::GeometryConstraint.into());
        }

        self.define(name, Shape::Ellipse(Ellipse::new(center, a, b)));
        Ok(())
    }

    fn circle_decl(&mut self) -> Result<(), ParseError> {
        let name = self.fresh_shape_name()?;
        let center = self.point()?;
        let radius = self.positive_number("radius")?;

        self.define(name, Shape::Circle(Circle::new(center, radius)));
        Ok(())
    }

    fn rectangle_decl(&mut self) -> Result<(), ParseError> {
        let name = self.fresh_shape_name()?;
        let center = self.point()?;
        let width = self.positive_number("width")?;
        let height = self.positive_number("height")?;

        self.define(name, Shape::Rectangle(Rectangle::new(center, width, height)));
        Ok(())
    }

    fn triangle_decl(&mut self) -> Result<(), ParseError> {
        let name = self.fresh_shape_name()?;
        let vertices = [self.point()?, self.point()?, self.point()?];

        self.define(name, Shape::Triangle(Triangle::new(vertices)));
        Ok(())
    }

    fn shift_decl(&mut self) -> Result<(), ParseError> {
        let name = self.fresh_shape_name()?;
        let offset = self.point()?;
        let inner = self.shape_ref()?;

        self.define(name, Shape::Shift(Shift::new(offset, inner)));
        Ok(())
    }

    fn rotation_decl(&mut self) -> Result<(), ParseError> {
        let name = self.fresh_shape_name()?;
        // The scene language writes angles in degrees; everything after the
        // parser works in radians.
        let theta = self.number()?.to_radians();
        let pivot = self.point()?;
        let inner = self.shape_ref()?;

        self.define(name, Shape::Rotation(Rotation::new(theta, pivot, inner)));
        Ok(())
    }

    fn union_decl(&mut self) -> Result<(), ParseError> {
        let name = self.fresh_shape_name()?;

        self.expect_delimiter('{')?;

        let mut members = vec![self.shape_ref()?];
        while self.cursor.peek_char() != '}' {
            members.push(self.shape_ref()?);
        }
        self.cursor.next_word();

        self.define(name, Shape::Union(Union::new(members)));
        Ok(())
    }

    fn difference_decl(&mut self) -> Result<(), ParseError> {
        let name = self.fresh_shape_name()?;
        let base = self.shape_ref()?;
        let cut = self.shape_ref()?;

        self.define(name, Shape::Difference(Difference::new(base, cut)));
        Ok(())
    }

    fn fill_decl(&mut self) -> Result<(), ParseError> {
        let shape = self.shape_ref()?;
        let color = self.color_expr()?;

        self.fills.push(Fill { shape, color });
        Ok(())
    }

    // ----- names and references -------------------------------------------

    fn fresh_shape_name(&mut self) -> Result<String, ParseError> {
        let word = self.cursor.next_word();
        valid_name(&word)?;

        if self.shapes.contains_key(&word) {
            return Err(ParseErrorKind::NameAlreadyUsed { namespace: "shape", name: word }.into());
        }

        Ok(word)
    }

    fn fresh_color_name(&mut self) -> Result<String, ParseError> {
        let word = self.cursor.next_word();
        valid_name(&word)?;

        if self.colors.contains_key(&word) {
            return Err(ParseErrorKind::NameAlreadyUsed { namespace: "color", name: word }.into());
        }

        Ok(word)
    }

    fn define(&mut self, name: String, shape: Shape) {
        self.shapes.insert(name, Arc::new(shape));
    }

    /// A reference to an already declared shape.
    fn shape_ref(&mut self) -> Result<Arc<Shape>, ParseError> {
        let word = self.cursor.next_word();
        valid_name(&word)?;

        self.shapes.get(&word).cloned().ok_or_else(|| {
            ParseErrorKind::UnknownName { namespace: "shape", name: word }.into()
        })
    }

    // ----- expressions ----------------------------------------------------

    /// A color expression: a literal `{r g b}` with normalized components,
    /// or the name of an already declared color.
    fn color_expr(&mut self) -> Result<Color, ParseError> {
        self.color_expr_inner().map_err(|e| e.chain("color"))
    }

    fn color_expr_inner(&mut self) -> Result<Color, ParseError> {
        let word = self.cursor.next_word();

        if word == "{" {
            let mut rgb = [0.0; 3];
            for component in &mut rgb {
                let n = self.number()?;
                if !(0.0..=1.0).contains(&n) {
                    return Err(ParseErrorKind::OutOfRange(format!(
                        "out of range color component {n}"
                    ))
                    .into());
                }
                *component = n;
            }

            self.expect_delimiter('}')?;
            Ok(Color::from_unit(rgb[0], rgb[1], rgb[2]))
        } else {
            valid_name(&word)?;
            self.colors.get(&word).copied().ok_or_else(|| {
                ParseErrorKind::UnknownName { namespace: "color", name: word }.into()
            })
        }
    }

    /// A point expression: a literal `{x y}`, a parenthesized sum,
    /// difference, scaling or division, or a named point `shape.tag`.
    fn point(&mut self) -> Result<Point, ParseError> {
        self.point_inner().map_err(|e| e.chain("point"))
    }

    fn point_inner(&mut self) -> Result<Point, ParseError> {
        let word = self.cursor.next_word();

        match word.as_str() {
            "{" => {
                let x = self.number()?;
                let y = self.number()?;
                self.expect_delimiter('}')?;

                Ok(Point::new(x, y))
            }
            "(" => {
                let op = self.cursor.next_word();
                match op.as_str() {
                    "+" => {
                        let mut p = self.point()?;
                        while self.cursor.peek_char() != ')' {
                            p += self.point()?;
                        }
                        self.cursor.next_word();
                        Ok(p)
                    }
                    "-" => {
                        let mut p = self.point()?;
                        while self.cursor.peek_char() != ')' {
                            p -= self.point()?;
                        }
                        self.cursor.next_word();
                        Ok(p)
                    }
                    "*" => {
                        let p = self.point()? * self.number()?;
                        self.expect_delimiter(')')?;
                        Ok(p)
                    }
                    "/" => {
                        let p = self.point()? / self.number()?;
                        self.expect_delimiter(')')?;
                        Ok(p)
                    }
                    _ => Err(ParseErrorKind::ExpectedToken {
                        expected: "operator (+, -, * or /)",
                        found: op,
                    }
                    .into()),
                }
            }
            _ => self.named_point(&word),
        }
    }

    /// Resolve a dotted `shape.tag` path against the shape table.
    fn named_point(&self, word: &str) -> Result<Point, ParseError> {
        let Some(pos) = word.find('.') else {
            return Err(ParseErrorKind::ExpectedToken {
                expected: "point",
                found: word.to_string(),
            }
            .into());
        };

        let (name, tag) = (&word[..pos], &word[pos + 1..]);
        valid_name(name)?;

        let shape = self.shapes.get(name).ok_or_else(|| {
            ParseError::new(ParseErrorKind::UnknownName {
                namespace: "shape",
                name: name.to_string(),
            })
        })?;

        shape.named_point(tag).map_err(|e| ParseError::new(e.into()))
    }

    /// A number expression: a signed literal, a projection of a named point
    /// (`shape.tag.x`), or a projection of a parenthesized or braced point
    /// expression (`(...).y`).
    fn number(&mut self) -> Result<f64, ParseError> {
        self.number_inner().map_err(|e| e.chain("number"))
    }

    fn number_inner(&mut self) -> Result<f64, ParseError> {
        let next = self.cursor.peek_char();

        if next.is_ascii_digit() || next == '.' {
            number_literal(&self.cursor.next_word())
        } else if next == '+' {
            let word = self.cursor.next_word();
            number_literal(&word[1..])
        } else if next == '-' {
            let word = self.cursor.next_word();
            Ok(-number_literal(&word[1..])?)
        } else if next.is_ascii_alphabetic() {
            let word = self.cursor.next_word();

            let Some(pos) = word.rfind('.') else {
                return Err(ParseErrorKind::ExpectedToken {
                    expected: "point coordinate",
                    found: word,
                }
                .into());
            };

            let p = self.named_point(&word[..pos])?;
            project(p, &word[pos + 1..])
        } else if next == '(' || next == '{' {
            let p = self.point()?;
            let word = self.cursor.next_word();

            let Some(projector) = word.strip_prefix('.') else {
                return Err(ParseErrorKind::ExpectedToken { expected: ".x or .y", found: word }
                    .into());
            };

            project(p, projector)
        } else {
            Err(ParseErrorKind::ExpectedToken { expected: "number", found: next.to_string() }
                .into())
        }
    }

    fn expect_delimiter(&mut self, delimiter: char) -> Result<(), ParseError> {
        let word = self.cursor.next_word();

        if word.len() == 1 && word.starts_with(delimiter) {
            Ok(())
        } else {
            Err(ParseErrorKind::MissingDelimiter(delimiter).into())
        }
    }
}

/// Extract one coordinate of a point; the projector must be `x` or `y`.
fn project(p: Point, projector: &str) -> Result<f64, ParseError> {
    match projector {
        "x" => Ok(p.x),
        "y" => Ok(p.y),
        _ => Err(ParseErrorKind::ExpectedToken {
            expected: "x or y",
            found: projector.to_string(),
        }
        .into()),
    }
}

/// Validate an unsigned numeric literal (digits with at most one decimal
/// point) and convert it.
fn number_literal(word: &str) -> Result<f64, ParseError> {
    let mut dots = 0;

    for ch in word.chars() {
        if ch == '.' {
            dots += 1;
            if dots > 1 {
                return Err(ParseErrorKind::InvalidNumber(format!("invalid number {word}")).into());
            }
        } else if !ch.is_ascii_digit() {
            return Err(ParseErrorKind::InvalidNumber(format!("invalid character {ch}")).into());
        }
    }

    if word.len() == dots {
        return Err(ParseErrorKind::InvalidNumber("expected digit(s)".to_string()).into());
    }

    word.parse::<f64>()
        .map_err(|_| ParseErrorKind::InvalidNumber(format!("invalid number {word}")).into())
}

/// Validate a declared or referenced name: a letter followed by letters,
/// digits or underscores.
fn valid_name(name: &str) -> Result<(), ParseError> {
    let mut chars = name.chars();

    match chars.next() {
        None => Err(ParseErrorKind::InvalidName("expected name, got empty".to_string()).into()),
        Some(first) if !first.is_ascii_alphabetic() => {
            Err(ParseErrorKind::InvalidName(format!("invalid first character {first}")).into())
        }
        Some(_) => match chars.find(|&ch| !ch.is_ascii_alphanumeric() && ch != '_') {
            Some(ch) => {
                Err(ParseErrorKind::InvalidName(format!("invalid character {ch}")).into())
            }
            None => Ok(()),
        },
    }
}
