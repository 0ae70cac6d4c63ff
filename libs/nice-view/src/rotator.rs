use crate::canvas::Canvas;
use crate::common::{Geometry, RotationConfig};
use crate::invalidate::Invalidate;
use crate::packing::{get_bit, set_bit};
use log::{debug, trace};

/// Rotates an upright [`Canvas`] by 90 degrees for the sideways panel.
///
/// The scratch buffer is allocated once here and reused by every in-place
/// pass, so a redraw never allocates.
pub struct Rotator<I: Invalidate> {
    geometry: Geometry,
    rotation: RotationConfig,
    scratch: Box<[u8]>,
    invalidator: I,
}

impl<I: Invalidate> Rotator<I> {
    #[must_use]
    pub fn new(geometry: Geometry, rotation: RotationConfig, invalidator: I) -> Self {
        debug!(
            "Rotator ready: {size}x{size}, stride {stride}, {direction:?}, edge offset {offset}",
            size = geometry.size(),
            stride = geometry.stride(),
            direction = rotation.direction,
            offset = rotation.edge_offset,
        );
        Self {
            geometry,
            rotation,
            scratch: vec![0; geometry.buffer_len()].into_boxed_slice(),
            invalidator,
        }
    }

    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    #[must_use]
    pub fn rotation(&self) -> RotationConfig {
        self.rotation
    }

    /// Replace `canvas` with its rotation and request a redraw.
    ///
    /// Panics if `canvas` was built for a different geometry.
    pub fn rotate(&mut self, canvas: &mut Canvas) {
        self.check_geometry(canvas);

        self.scratch.copy_from_slice(canvas.as_bytes());
        transform(
            &self.scratch,
            canvas.as_bytes_mut(),
            self.geometry,
            self.rotation,
        );

        trace!("Rotated canvas in place");
        self.invalidator.invalidate();
    }

    /// Write the rotation of `src` into `dst`, leaving `src` untouched, and
    /// request a redraw.
    ///
    /// Panics if either canvas was built for a different geometry.
    pub fn rotate_into(&self, src: &Canvas, dst: &mut Canvas) {
        self.check_geometry(src);
        self.check_geometry(dst);

        transform(
            src.as_bytes(),
            dst.as_bytes_mut(),
            self.geometry,
            self.rotation,
        );

        trace!("Rotated canvas into second buffer");
        self.invalidator.invalidate();
    }

    fn check_geometry(&self, canvas: &Canvas) {
        assert_eq!(
            canvas.geometry(),
            self.geometry,
            "canvas geometry does not match rotator"
        );
    }
}

/// Clear `dst`, then OR every foreground pixel of `src` into its rotated
/// position. Only coordinates inside the canvas are read, so stride padding
/// in `src` is never a source and always ends up cleared in `dst`.
fn transform(src: &[u8], dst: &mut [u8], geometry: Geometry, rotation: RotationConfig) {
    let size = geometry.size();
    let stride = geometry.stride();

    dst.fill(0);

    for y in 0..size {
        for x in 0..size {
            if !get_bit(src, stride, x, y) {
                continue;
            }
            if let Some((new_x, new_y)) = rotation.map(size, x, y) {
                set_bit(dst, stride, new_x, new_y, true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Direction;
    use crate::invalidate::NoInvalidate;
    use std::cell::Cell;

    fn canvas_with(geometry: Geometry, pixels: &[(u32, u32)]) -> Canvas {
        let mut canvas = Canvas::new(geometry);
        for &(x, y) in pixels {
            canvas.set_pixel(x, y, true);
        }
        canvas
    }

    fn set_pixels(canvas: &Canvas) -> Vec<(u32, u32)> {
        let size = canvas.geometry().size();
        (0..size)
            .flat_map(|y| (0..size).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.get_pixel(x, y))
            .collect()
    }

    #[test]
    fn test_top_left_moves_to_top_right() {
        let geometry = Geometry::new(8, 1).unwrap();
        let mut rotator = Rotator::new(geometry, RotationConfig::default(), NoInvalidate);
        let mut canvas = canvas_with(geometry, &[(0, 0)]);

        rotator.rotate(&mut canvas);

        assert_eq!(set_pixels(&canvas), vec![(7, 0)]);
        assert_eq!(canvas.as_bytes()[0], 0b0000_0001);
    }

    #[test]
    fn test_top_right_moves_to_bottom_right() {
        let geometry = Geometry::new(8, 1).unwrap();
        let mut rotator = Rotator::new(geometry, RotationConfig::default(), NoInvalidate);
        let mut canvas = canvas_with(geometry, &[(7, 0)]);

        rotator.rotate(&mut canvas);

        assert_eq!(set_pixels(&canvas), vec![(7, 7)]);
    }

    #[test]
    fn test_blank_and_full_canvases() {
        let geometry = Geometry::NICE_VIEW;
        let mut rotator = Rotator::new(geometry, RotationConfig::default(), NoInvalidate);

        let mut blank = Canvas::new(geometry);
        rotator.rotate(&mut blank);
        assert_eq!(blank, Canvas::new(geometry));

        let mut full = Canvas::new(geometry);
        for y in 0..68 {
            for x in 0..68 {
                full.set_pixel(x, y, true);
            }
        }
        let before = full.clone();
        rotator.rotate(&mut full);
        assert_eq!(full, before);
    }

    #[test]
    fn test_padding_garbage_never_leaks() {
        let geometry = Geometry::new(68, 4).unwrap();
        let mut rotator = Rotator::new(geometry, RotationConfig::default(), NoInvalidate);
        let mut canvas = canvas_with(geometry, &[(3, 5)]);
        for row in canvas.as_bytes_mut().chunks_mut(geometry.stride()) {
            row[8] |= 0x0F;
            row[9..].fill(0xA5);
        }

        rotator.rotate(&mut canvas);

        assert_eq!(set_pixels(&canvas), vec![(62, 3)]);
        assert_eq!(
            canvas.as_bytes().iter().map(|b| b.count_ones()).sum::<u32>(),
            1
        );
    }

    #[test]
    fn test_rotate_into_matches_in_place() {
        let geometry = Geometry::NICE_VIEW;
        let mut rotator = Rotator::new(geometry, RotationConfig::default(), NoInvalidate);
        let src = canvas_with(geometry, &[(0, 2), (29, 13), (10, 40), (67, 67)]);

        let mut dst = canvas_with(geometry, &[(1, 1), (50, 50)]);
        rotator.rotate_into(&src, &mut dst);

        let mut in_place = src.clone();
        rotator.rotate(&mut in_place);

        assert_eq!(dst, in_place);
        assert!(src.get_pixel(0, 2));
    }

    #[test]
    fn test_counter_clockwise_undoes_clockwise() {
        let geometry = Geometry::new(20, 2).unwrap();
        let rotation = RotationConfig::default();
        let mut cw = Rotator::new(geometry, rotation, NoInvalidate);
        let mut ccw = Rotator::new(
            geometry,
            RotationConfig::new(rotation.direction.reversed()),
            NoInvalidate,
        );
        let original = canvas_with(geometry, &[(0, 0), (19, 3), (4, 17), (11, 11)]);

        let mut canvas = original.clone();
        cw.rotate(&mut canvas);
        assert_ne!(canvas, original);
        ccw.rotate(&mut canvas);

        assert_eq!(canvas, original);
    }

    #[test]
    fn test_counter_clockwise_single_pixel() {
        let geometry = Geometry::new(8, 1).unwrap();
        let mut rotator = Rotator::new(
            geometry,
            RotationConfig::new(Direction::CounterClockwise),
            NoInvalidate,
        );
        let mut canvas = canvas_with(geometry, &[(0, 0)]);

        rotator.rotate(&mut canvas);

        assert_eq!(set_pixels(&canvas), vec![(0, 7)]);
    }

    #[test]
    fn test_edge_offset_shifts_and_drops() {
        let geometry = Geometry::new(8, 1).unwrap();
        let mut rotator = Rotator::new(
            geometry,
            RotationConfig::default().with_edge_offset(-1),
            NoInvalidate,
        );
        // (2, 0) lands on x = 7 - 1, (2, 7) would land on x = -1.
        let mut canvas = canvas_with(geometry, &[(2, 0), (2, 7)]);

        rotator.rotate(&mut canvas);

        assert_eq!(set_pixels(&canvas), vec![(6, 2)]);
    }

    #[test]
    fn test_invalidates_once_per_pass() {
        let geometry = Geometry::new(8, 1).unwrap();
        let calls = Cell::new(0);
        let mut rotator = Rotator::new(geometry, RotationConfig::default(), || {
            calls.set(calls.get() + 1);
        });
        let mut canvas = Canvas::new(geometry);
        let mut second = Canvas::new(geometry);

        rotator.rotate(&mut canvas);
        assert_eq!(calls.get(), 1);
        rotator.rotate_into(&canvas, &mut second);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    #[should_panic(expected = "canvas geometry does not match rotator")]
    fn test_geometry_mismatch_panics() {
        let mut rotator = Rotator::new(Geometry::NICE_VIEW, RotationConfig::default(), NoInvalidate);
        let mut canvas = Canvas::new(Geometry::new(68, 4).unwrap());
        rotator.rotate(&mut canvas);
    }
}
