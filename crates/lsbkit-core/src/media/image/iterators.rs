use image::buffer::{Pixels, PixelsMut, Rows, RowsMut};
use image::Pixel;
use std::slice::{Iter, IterMut};

/// Allows transposed mutable access to pixel, like column based
pub(crate) struct TransposeMut<'a, P: Pixel + 'a> {
    i: usize,
    i_max: usize,
    height: usize,
    rows_mut: RowsMut<'a, P>,
    rows_buffer: Vec<PixelsMut<'a, P>>,
}

impl<'a, P: Pixel + 'a> TransposeMut<'a, P> {
    /// utilises RowsMut to give column based mut access to pixel
    pub fn from_rows_mut(rows_mut: RowsMut<'a, P>, width: u32) -> Self {
        let height = rows_mut.len();

        Self {
            i: 0,
            i_max: height * width as usize,
            height,
            rows_mut,
            rows_buffer: Vec::with_capacity(height),
        }
    }
}

impl<'a, P: Pixel + 'a> Iterator for TransposeMut<'a, P> {
    type Item = &'a mut P;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i == self.i_max {
            return None;
        }
        let row_idx = self.i % self.height;
        self.i += 1;
        match self.rows_buffer.get_mut(row_idx) {
            None => {
                let mut row = self.rows_mut.next()?;
                let p = row.next();
                self.rows_buffer.push(row);
                p
            }
            Some(row) => row.next(),
        }
    }
}

pub(crate) struct Transpose<'a, P: Pixel + 'a> {
    i: usize,
    i_max: usize,
    height: usize,
    rows: Rows<'a, P>,
    rows_buffer: Vec<Pixels<'a, P>>,
}

impl<'a, P: Pixel + 'a> Transpose<'a, P> {
    /// utilizes Rows to give column based readonly access to pixel
    pub fn from_rows(rows: Rows<'a, P>, width: u32) -> Self {
        let height = rows.len();

        Self {
            i: 0,
            i_max: height * width as usize,
            height,
            rows,
            rows_buffer: Vec::with_capacity(height),
        }
    }
}

impl<'a, P: Pixel + 'a> Iterator for Transpose<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i == self.i_max {
            return None;
        }
        let row_idx = self.i % self.height;
        self.i += 1;
        match self.rows_buffer.get_mut(row_idx) {
            None => {
                let mut row = self.rows.next()?;
                let p = row.next();
                self.rows_buffer.push(row);
                p
            }
            Some(row) => row.next(),
        }
    }
}

/// All colour channels of all pixels, in the order the pixels are yielded
pub(crate) struct ColorIterMut<'a, P: Pixel + 'a> {
    pixel: TransposeMut<'a, P>,
    colors: Option<IterMut<'a, P::Subpixel>>,
}

impl<'a, P: Pixel + 'a> ColorIterMut<'a, P> {
    pub fn from_transpose(t: TransposeMut<'a, P>) -> Self {
        Self {
            pixel: t,
            colors: None,
        }
    }
}

impl<'a, P: Pixel + 'a> Iterator for ColorIterMut<'a, P> {
    type Item = &'a mut P::Subpixel;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(c) = self.colors.as_mut().and_then(Iterator::next) {
                return Some(c);
            }
            self.colors = Some(self.pixel.next()?.channels_mut().iter_mut());
        }
    }
}

pub(crate) struct ColorIter<'a, P: Pixel + 'a> {
    pixel: Transpose<'a, P>,
    colors: Option<Iter<'a, P::Subpixel>>,
}

impl<'a, P: Pixel + 'a> ColorIter<'a, P> {
    pub fn from_transpose(t: Transpose<'a, P>) -> Self {
        Self {
            pixel: t,
            colors: None,
        }
    }
}

impl<'a, P: Pixel + 'a> Iterator for ColorIter<'a, P> {
    type Item = &'a P::Subpixel;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(c) = self.colors.as_mut().and_then(Iterator::next) {
                return Some(c);
            }
            self.colors = Some(self.pixel.next()?.channels().iter());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_4x6_linear_growing_colors;
    use image::RgbImage;

    #[test]
    fn should_ensure_transpose_works_for_regular_image() {
        let img = prepare_4x6_linear_growing_colors();
        let width = img.width();
        assert_eq!(width, 4);
        assert_eq!(img.height(), 6);
        assert_eq!(img.rows().len(), img.height() as usize);

        let color_iter = ColorIter::from_transpose(Transpose::from_rows(img.rows(), width));
        let mut count = 0;
        for (i, c) in color_iter.enumerate() {
            assert_eq!(*c, i as u8, "the ({i}+1)-th color was wrong");
            count += 1;
        }
        assert_eq!(count, 4 * 6 * 3);
    }

    #[test]
    fn should_ensure_transpose_mut_works_for_regular_image() {
        let mut img = prepare_4x6_linear_growing_colors();
        let width = img.width();

        let color_iter =
            ColorIterMut::from_transpose(TransposeMut::from_rows_mut(img.rows_mut(), width));
        for (i, c) in color_iter.enumerate() {
            assert_eq!(*c, i as u8, "the ({i}+1)-th color was wrong");
            *c = 0;
        }
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn should_visit_columns_before_rows() {
        let img = prepare_4x6_linear_growing_colors();
        let pixels: Vec<_> = Transpose::from_rows(img.rows(), img.width()).collect();

        assert_eq!(pixels[0], img.get_pixel(0, 0));
        assert_eq!(pixels[1], img.get_pixel(0, 1));
        assert_eq!(pixels[6], img.get_pixel(1, 0));
        assert_eq!(pixels[23], img.get_pixel(3, 5));
    }

    #[test]
    fn should_yield_nothing_for_an_empty_image() {
        let img = RgbImage::new(0, 0);

        assert_eq!(
            ColorIter::from_transpose(Transpose::from_rows(img.rows(), img.width())).count(),
            0
        );
    }
}
