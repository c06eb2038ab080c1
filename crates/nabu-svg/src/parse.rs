//! SVG path-data (`d` attribute) parser.

use nabu_path::{ArcSize, Path, PathDirection, Point};

use crate::error::ParseError;
use crate::scan::{scan_flag, scan_scalar, skip_sep};

/// Parses an SVG path string into a [`Path`].
///
/// Supports the full command set (`MmLlHhVvCcSsQqTtAaZz`), implicit command
/// repetition, `M` repetition turning into `L`, smooth control-point
/// reflection, and arc flags running into the following number. The first
/// syntax error aborts the whole parse — no partially-built path escapes.
pub fn from_svg(d: &str) -> Result<Path, ParseError> {
    Parser::new(d).run()
}

struct Parser<'s> {
    full: &'s str,
    rest: &'s str,
    path: Path,
    current: Point,
    subpath_start: Point,
    /// Command to repeat when coordinates appear without a letter.
    repeat_cmd: Option<char>,
    /// Outgoing control of the previous C/S, for S reflection.
    last_cubic_ctrl: Option<Point>,
    /// Control of the previous Q/T, for T reflection.
    last_quad_ctrl: Option<Point>,
}

impl<'s> Parser<'s> {
    fn new(d: &'s str) -> Self {
        Self {
            full: d,
            rest: d,
            path: Path::new(),
            current: Point::ZERO,
            subpath_start: Point::ZERO,
            repeat_cmd: None,
            last_cubic_ctrl: None,
            last_quad_ctrl: None,
        }
    }

    fn offset(&self) -> usize {
        self.full.len() - self.rest.len()
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        ParseError::new(msg, self.offset())
    }

    fn run(mut self) -> Result<Path, ParseError> {
        loop {
            self.rest = skip_sep(self.rest);
            let Some(c) = self.rest.chars().next() else {
                return Ok(self.path);
            };

            let cmd = if c.is_ascii_alphabetic() {
                self.rest = &self.rest[1..];
                c
            } else {
                // Coordinates without a letter repeat the previous command.
                match self.repeat_cmd {
                    Some(cmd) => cmd,
                    None if self.path.is_empty() => {
                        return Err(self.err("path must start with a moveto command"));
                    }
                    None => return Err(self.err("expected a command letter")),
                }
            };

            self.apply(cmd)?;
        }
    }

    fn apply(&mut self, cmd: char) -> Result<(), ParseError> {
        if self.path.is_empty() && !matches!(cmd, 'M' | 'm') {
            return Err(self.err(format!("expected moveto, got {cmd:?}")));
        }
        let relative = cmd.is_ascii_lowercase();

        match cmd.to_ascii_uppercase() {
            'M' => {
                let p = self.point(relative)?;
                self.path.move_to(p);
                self.subpath_start = p;
                self.current = p;
                // Extra coordinate pairs after a moveto are implicit linetos.
                self.repeat_cmd = Some(if relative { 'l' } else { 'L' });
            }
            'L' => {
                let p = self.point(relative)?;
                self.path.line_to(p);
                self.current = p;
                self.repeat_cmd = Some(cmd);
            }
            'H' => {
                let x = self.scalar()?;
                let p = Point::new(if relative { self.current.x + x } else { x }, self.current.y);
                self.path.line_to(p);
                self.current = p;
                self.repeat_cmd = Some(cmd);
            }
            'V' => {
                let y = self.scalar()?;
                let p = Point::new(self.current.x, if relative { self.current.y + y } else { y });
                self.path.line_to(p);
                self.current = p;
                self.repeat_cmd = Some(cmd);
            }
            'C' => {
                let c1 = self.point(relative)?;
                let c2 = self.point(relative)?;
                let end = self.point(relative)?;
                self.cubic(c1, c2, end);
                self.repeat_cmd = Some(cmd);
            }
            'S' => {
                let c1 = self.reflected(self.last_cubic_ctrl);
                let c2 = self.point(relative)?;
                let end = self.point(relative)?;
                self.cubic(c1, c2, end);
                self.repeat_cmd = Some(cmd);
            }
            'Q' => {
                let ctrl = self.point(relative)?;
                let end = self.point(relative)?;
                self.quad(ctrl, end);
                self.repeat_cmd = Some(cmd);
            }
            'T' => {
                let ctrl = self.reflected(self.last_quad_ctrl);
                let end = self.point(relative)?;
                self.quad(ctrl, end);
                self.repeat_cmd = Some(cmd);
            }
            'A' => {
                let rx = self.scalar()?;
                let ry = self.scalar()?;
                let rotate = self.scalar()?;
                let large = self.flag()?;
                let sweep = self.flag()?;
                let end = self.point(relative)?;

                let size = if large { ArcSize::Large } else { ArcSize::Small };
                // A set sweep flag sweeps in the positive-angle direction,
                // which is clockwise on a y-down screen.
                let dir = if sweep { PathDirection::Cw } else { PathDirection::Ccw };
                self.path.arc_to(Point::new(rx, ry), rotate, size, dir, end);
                self.current = end;
                self.forget_controls();
                self.repeat_cmd = Some(cmd);
            }
            'Z' => {
                self.path.close();
                self.current = self.subpath_start;
                self.forget_controls();
                // Coordinates cannot follow a closepath without a letter.
                self.repeat_cmd = None;
            }
            other => return Err(self.err(format!("unknown path command {other:?}"))),
        }

        // Reflection only sees the immediately preceding curve command.
        match cmd.to_ascii_uppercase() {
            'C' | 'S' => self.last_quad_ctrl = None,
            'Q' | 'T' => self.last_cubic_ctrl = None,
            'A' | 'Z' => {}
            _ => self.forget_controls(),
        }
        Ok(())
    }

    fn cubic(&mut self, c1: Point, c2: Point, end: Point) {
        self.path.cubic_to(c1, c2, end);
        self.current = end;
        self.last_cubic_ctrl = Some(c2);
    }

    fn quad(&mut self, ctrl: Point, end: Point) {
        self.path.quad_to(ctrl, end);
        self.current = end;
        self.last_quad_ctrl = Some(ctrl);
    }

    /// Smooth-command control point: the previous control mirrored about
    /// the current point, or the current point when the previous command
    /// wasn't in the same curve family.
    fn reflected(&self, prev_ctrl: Option<Point>) -> Point {
        match prev_ctrl {
            Some(c) => self.current * 2.0 - c,
            None => self.current,
        }
    }

    fn forget_controls(&mut self) {
        self.last_cubic_ctrl = None;
        self.last_quad_ctrl = None;
    }

    fn scalar(&mut self) -> Result<f32, ParseError> {
        self.rest = skip_sep(self.rest);
        match scan_scalar(self.rest) {
            Some((rest, value)) => {
                self.rest = rest;
                Ok(value)
            }
            None => Err(self.err("expected a number")),
        }
    }

    fn flag(&mut self) -> Result<bool, ParseError> {
        self.rest = skip_sep(self.rest);
        match scan_flag(self.rest) {
            Some((rest, value)) => {
                self.rest = rest;
                Ok(value)
            }
            None => Err(self.err("expected an arc flag (0 or 1)")),
        }
    }

    fn point(&mut self, relative: bool) -> Result<Point, ParseError> {
        let x = self.scalar()?;
        let y = self.scalar()?;
        let p = Point::new(x, y);
        Ok(if relative { self.current + p } else { p })
    }
}
