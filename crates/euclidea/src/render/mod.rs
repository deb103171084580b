//! Renders a solved board to a PNG so a construction can be inspected
//! visually after the solver finds it.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::configs::IMAGE_SIZE;
use crate::error::{EuclideaError, Result};
use crate::geom::{Board, Point};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const LINE_COLOR: Rgb<u8> = Rgb([20, 20, 20]);
const POINT_COLOR: Rgb<u8> = Rgb([200, 30, 30]);
const CIRCLE_COLOR: Rgb<u8> = Rgb([30, 90, 200]);
const MARGIN_FRACTION: f64 = 0.1;

/// The world-to-pixel mapping for one render: a square region of the plane,
/// padded and centered around everything on the board, scaled to
/// `IMAGE_SIZE` pixels.
struct Viewport {
    min_x: f64,
    min_y: f64,
    side: f64,
}

impl Viewport {
    fn to_pixel(&self, p: Point) -> (i64, i64) {
        let x = (p.x - self.min_x) / self.side * IMAGE_SIZE as f64;
        // Image rows grow downward; the plane's y grows upward.
        let y = (1.0 - (p.y - self.min_y) / self.side) * IMAGE_SIZE as f64;
        (x.round() as i64, y.round() as i64)
    }
}

/// Renders every primitive on `board` to a PNG at `path`. Errors are
/// possible (an empty board has no bounding box, or the filesystem write can
/// fail); callers that treat rendering as best-effort should log and
/// continue rather than propagate.
pub fn render_board_to_png(board: &Board, path: &Path) -> Result<()> {
    let viewport = viewport_for(board)?;
    let mut image: RgbImage = ImageBuffer::from_pixel(IMAGE_SIZE, IMAGE_SIZE, BACKGROUND);

    for l in board.lines.iter() {
        draw_line_like(&mut image, &viewport, clip_line_to_viewport(l, &viewport));
    }
    for h in board.half_lines.iter() {
        if let Some(seg) = clip_half_line_to_viewport(h, &viewport) {
            draw_line_like(&mut image, &viewport, Some(seg));
        }
    }
    for s in board.segments.iter() {
        draw_segment(&mut image, &viewport, s.point1, s.point2);
    }
    for c in board.circles.iter() {
        draw_circle(&mut image, &viewport, c.center, c.radius);
    }
    for p in board.points.iter() {
        draw_point(&mut image, &viewport, *p);
    }

    image
        .save(path)
        .map_err(|err| EuclideaError::render(err.to_string()))
}

fn viewport_for(board: &Board) -> Result<Viewport> {
    let points = board.points.snapshot();
    if points.is_empty() {
        return Err(EuclideaError::render("board has no points to bound"));
    }
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in &points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    let width = (max_x - min_x).max(1e-3);
    let height = (max_y - min_y).max(1e-3);
    let side = width.max(height) * (1.0 + 2.0 * MARGIN_FRACTION);
    let center_x = (min_x + max_x) / 2.0;
    let center_y = (min_y + max_y) / 2.0;

    Ok(Viewport {
        min_x: center_x - side / 2.0,
        min_y: center_y - side / 2.0,
        side,
    })
}

/// A line clipped against the viewport's square is always representable as
/// a segment for drawing purposes, or absent if it misses the square
/// entirely (reported via `tracing::warn!` by the caller's caller rather
/// than treated as fatal).
fn clip_line_to_viewport(l: &crate::geom::Line, viewport: &Viewport) -> Option<(Point, Point)> {
    let corners = viewport_boundary(viewport);
    let mut hits = Vec::new();
    for (a, b) in &corners {
        let edge = crate::geom::Segment::new(*a, *b);
        hits.extend(
            crate::geom::intersection::line_segment(l, &edge)
                .points
                .into_iter(),
        );
    }
    boundary_hits_to_segment(hits)
}

fn clip_half_line_to_viewport(
    h: &crate::geom::HalfLine,
    viewport: &Viewport,
) -> Option<(Point, Point)> {
    let corners = viewport_boundary(viewport);
    let mut hits = Vec::new();
    for (a, b) in &corners {
        let edge = crate::geom::Segment::new(*a, *b);
        hits.extend(
            crate::geom::intersection::halfline_segment(h, &edge)
                .points
                .into_iter(),
        );
    }
    match hits.into_iter().next() {
        Some(far) => Some((h.point, far)),
        None => {
            tracing::warn!("half-line does not cross the render viewport");
            None
        }
    }
}

fn viewport_boundary(viewport: &Viewport) -> [(Point, Point); 4] {
    let min_x = viewport.min_x;
    let min_y = viewport.min_y;
    let max_x = viewport.min_x + viewport.side;
    let max_y = viewport.min_y + viewport.side;
    [
        (Point::new(min_x, min_y), Point::new(max_x, min_y)),
        (Point::new(max_x, min_y), Point::new(max_x, max_y)),
        (Point::new(max_x, max_y), Point::new(min_x, max_y)),
        (Point::new(min_x, max_y), Point::new(min_x, min_y)),
    ]
}

fn boundary_hits_to_segment(mut hits: Vec<Point>) -> Option<(Point, Point)> {
    hits.dedup_by(|a, b| a.approx_eq(b));
    match hits.len() {
        0 => {
            tracing::warn!("line does not cross the render viewport");
            None
        }
        1 => Some((hits[0], hits[0])),
        _ => {
            if hits.len() > 2 {
                tracing::warn!(count = hits.len(), "line crossed viewport more than twice");
            }
            Some((hits[0], hits[1]))
        }
    }
}

fn draw_line_like(image: &mut RgbImage, viewport: &Viewport, clipped: Option<(Point, Point)>) {
    if let Some((a, b)) = clipped {
        draw_segment_colored(image, viewport, a, b, LINE_COLOR);
    }
}

fn draw_segment(image: &mut RgbImage, viewport: &Viewport, a: Point, b: Point) {
    draw_segment_colored(image, viewport, a, b, LINE_COLOR);
}

fn draw_segment_colored(image: &mut RgbImage, viewport: &Viewport, a: Point, b: Point, color: Rgb<u8>) {
    let (x0, y0) = viewport.to_pixel(a);
    let (x1, y1) = viewport.to_pixel(b);
    for (x, y) in bresenham(x0, y0, x1, y1) {
        put_pixel_checked(image, x, y, color);
    }
}

fn draw_circle(image: &mut RgbImage, viewport: &Viewport, center: Point, radius: f64) {
    let (cx, cy) = viewport.to_pixel(center);
    let r = (radius / viewport.side * IMAGE_SIZE as f64).round() as i64;
    if r <= 0 {
        return;
    }
    // Midpoint circle algorithm.
    let mut x = r;
    let mut y = 0i64;
    let mut err = 0i64;
    while x >= y {
        for (dx, dy) in [
            (x, y),
            (y, x),
            (-y, x),
            (-x, y),
            (-x, -y),
            (-y, -x),
            (y, -x),
            (x, -y),
        ] {
            put_pixel_checked(image, cx + dx, cy + dy, CIRCLE_COLOR);
        }
        y += 1;
        if err <= 0 {
            err += 2 * y + 1;
        }
        if err > 0 {
            x -= 1;
            err -= 2 * x + 1;
        }
    }
}

fn draw_point(image: &mut RgbImage, viewport: &Viewport, p: Point) {
    let (cx, cy) = viewport.to_pixel(p);
    for dx in -2..=2 {
        for dy in -2..=2 {
            if dx * dx + dy * dy <= 4 {
                put_pixel_checked(image, cx + dx, cy + dy, POINT_COLOR);
            }
        }
    }
}

fn put_pixel_checked(image: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x < 0 || y < 0 || x >= IMAGE_SIZE as i64 || y >= IMAGE_SIZE as i64 {
        return;
    }
    image.put_pixel(x as u32, y as u32, color);
}

/// Bresenham's line algorithm, inclusive of both endpoints.
fn bresenham(x0: i64, y0: i64, x1: i64, y1: i64) -> Vec<(i64, i64)> {
    let mut points = Vec::new();
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);
    loop {
        points.push((x, y));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Circle, Line};
    use tempfile::tempdir;

    #[test]
    fn renders_a_simple_board_to_disk() {
        let mut board = Board::new();
        board.add_line(Line::from_two_points(
            &Point::new(-2.0, 0.0),
            &Point::new(2.0, 0.0),
        ));
        board.add_circle(Circle::from_radius(Point::new(0.0, 0.0), 1.0));

        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("board.png");
        render_board_to_png(&board, &path).expect("render succeeds");
        assert!(path.exists());
    }

    #[test]
    fn empty_board_reports_a_render_error() {
        let board = Board::new();
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("empty.png");
        assert!(render_board_to_png(&board, &path).is_err());
    }
}
