//! Frame annotation for the render sink

use blink_core::FaceTrackId;
use eye_detect::Rect;
use frame_source::VideoFrame;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect as DrawRect;

const BOX_COLOR: Rgb<u8> = Rgb([255, 255, 0]);

/// Advisory per-frame overlay data produced by the session
#[derive(Debug, Clone, Default)]
pub struct OverlayInfo {
    pub faces: Vec<Rect>,
    pub eyes: Vec<Rect>,
    /// Current rolling blink count per face
    pub blink_counts: Vec<(FaceTrackId, u32)>,
}

impl OverlayInfo {
    pub fn total_blinks(&self) -> u32 {
        self.blink_counts.iter().map(|(_, n)| n).sum()
    }
}

/// Draw face and eye rectangles on a copy of the frame
pub fn annotate(frame: &VideoFrame, overlay: &OverlayInfo) -> RgbImage {
    let mut img = RgbImage::from_raw(frame.width, frame.height, frame.data.clone())
        .unwrap_or_else(|| RgbImage::new(frame.width, frame.height));

    for rect in overlay.faces.iter().chain(overlay.eyes.iter()) {
        if rect.width == 0 || rect.height == 0 {
            continue;
        }
        draw_hollow_rect_mut(
            &mut img,
            DrawRect::at(rect.x as i32, rect.y as i32).of_size(rect.width, rect.height),
            BOX_COLOR,
        );
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotate_draws_rect_outline() {
        let frame = VideoFrame::new(vec![0; 64 * 64 * 3], 64, 64, 0, 0);
        let overlay = OverlayInfo {
            faces: vec![Rect::new(8, 8, 16, 16)],
            ..Default::default()
        };
        let img = annotate(&frame, &overlay);
        assert_eq!(*img.get_pixel(8, 8), BOX_COLOR);
        assert_eq!(*img.get_pixel(23, 8), BOX_COLOR);
        // Interior untouched
        assert_eq!(*img.get_pixel(12, 12), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_total_blinks_sums_faces() {
        let overlay = OverlayInfo {
            blink_counts: vec![(FaceTrackId(0), 2), (FaceTrackId(1), 1)],
            ..Default::default()
        };
        assert_eq!(overlay.total_blinks(), 3);
    }
}
