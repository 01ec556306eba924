//! The coverage-mask rasterizer.
//!
//! The pixel at integer coordinates `(x, y)` is sampled at
//! `(x + 0.5, y + 0.5)` and takes the color of the *last* fill whose shape
//! contains that sample point; untouched pixels keep the black canvas
//! default. Rather than painting every fill front-to-back, the fills are
//! visited in reverse with a per-pixel coverage mask: the first fill (in
//! reverse order) to contain a sample point claims the pixel, and every
//! later (i.e. underlying) fill skips it without another containment test.

use log::debug;

use super::image::Image;
use crate::geometry::{Domain, Point};
use crate::scene::{Fill, Scene};

/// The pixel rectangle a fill may touch: its domain clipped to the canvas.
///
/// The high ends are `floor(max) + 1` before clamping, so a domain whose
/// `max.x` is integral admits one extra sample column. That column never
/// passes the containment test, but it is part of the loop bounds on
/// purpose, for compatibility with the language's established renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Clip {
    x0: i64,
    x1: i64,
    y0: i64,
    y1: i64,
}

impl Clip {
    fn of(domain: &Domain, width: u32, height: u32) -> Self {
        Self {
            x0: (domain.min.x.floor() as i64).max(0),
            y0: (domain.min.y.floor() as i64).max(0),
            x1: ((domain.max.x.floor() + 1.0) as i64).min(i64::from(width) - 1),
            y1: ((domain.max.y.floor() + 1.0) as i64).min(i64::from(height) - 1),
        }
    }

    fn is_empty(&self) -> bool {
        self.x0 > self.x1 || self.y0 > self.y1
    }
}

/// Sample point for the pixel at `(x, y)`.
fn sample(x: i64, y: i64) -> Point {
    Point::new(x as f64 + 0.5, y as f64 + 0.5)
}

/// Render a scene into a fresh image.
pub fn render(scene: &Scene) -> Image {
    let width = scene.width();
    let height = scene.height();
    let mut image = Image::new(width, height);

    if width == 0 || height == 0 || scene.fills().is_empty() {
        return image;
    }

    // Last fill wins, so walk the list backwards; each entry keeps the
    // pixel rectangle its domain clips to.
    let passes: Vec<(&Fill, Clip)> = scene
        .fills()
        .iter()
        .rev()
        .map(|fill| (fill, Clip::of(&fill.shape.domain(), width, height)))
        .collect();

    paint(&mut image, &passes, width);

    debug!("rendered {} fills onto a {width}x{height} canvas", passes.len());

    image
}

#[cfg(not(feature = "parallel"))]
fn paint(image: &mut Image, passes: &[(&Fill, Clip)], width: u32) {
    let width = width as usize;
    let mut covered = vec![false; width * image.height() as usize];

    for (fill, clip) in passes {
        if clip.is_empty() {
            continue;
        }

        for y in clip.y0..=clip.y1 {
            for x in clip.x0..=clip.x1 {
                let index = y as usize * width + x as usize;
                if covered[index] {
                    continue;
                }

                if fill.shape.contains(sample(x, y)) {
                    image.set(x as u32, y as u32, fill.color);
                    covered[index] = true;
                }
            }
        }
    }
}

/// Row-parallel variant: each rayon task owns one image row and its own
/// slice of the coverage mask, so the rows stay disjoint and the output is
/// identical to the serial pass.
#[cfg(feature = "parallel")]
fn paint(image: &mut Image, passes: &[(&Fill, Clip)], width: u32) {
    use rayon::prelude::*;

    let width = width as usize;

    image
        .pixels_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as i64;
            let mut covered = vec![false; width];

            for (fill, clip) in passes {
                if clip.is_empty() || y < clip.y0 || y > clip.y1 {
                    continue;
                }

                for x in clip.x0..=clip.x1 {
                    let index = x as usize;
                    if covered[index] {
                        continue;
                    }

                    if fill.shape.contains(sample(x, y)) {
                        row[index] = fill.color;
                        covered[index] = true;
                    }
                }
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_clamps_to_the_canvas() {
        let domain = Domain::new(Point::new(-3.2, -1.0), Point::new(4.6, 12.9));
        let clip = Clip::of(&domain, 10, 10);

        assert_eq!(clip, Clip { x0: 0, x1: 5, y0: 0, y1: 9 });
    }

    #[test]
    fn integral_domain_edge_admits_an_extra_column() {
        let domain = Domain::new(Point::new(1.0, 1.0), Point::new(4.0, 4.0));
        let clip = Clip::of(&domain, 10, 10);

        // floor(4.0) + 1 = 5: column 5 is visited even though no sample in
        // it can fall inside the domain.
        assert_eq!(clip, Clip { x0: 1, x1: 5, y0: 1, y1: 5 });
    }

    #[test]
    fn domain_outside_the_canvas_is_empty() {
        let domain = Domain::new(Point::new(-8.0, -8.0), Point::new(-3.0, -3.0));
        let clip = Clip::of(&domain, 10, 10);

        assert!(clip.is_empty());
    }
}
