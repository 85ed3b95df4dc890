use super::FilterError;

/// Names of the built-in 3x3 kernels, in catalog order.
pub const FILTER_NAMES: [&str; 6] = ["edge", "sharpen", "blur", "gaussian", "emboss", "identity"];

#[rustfmt::skip]
const EDGE: [f32; 9] = [
    -1.0, -1.0, -1.0,
    -1.0,  8.0, -1.0,
    -1.0, -1.0, -1.0,
];

#[rustfmt::skip]
const SHARPEN: [f32; 9] = [
     0.0, -1.0,  0.0,
    -1.0,  5.0, -1.0,
     0.0, -1.0,  0.0,
];

const BLUR: [f32; 9] = [1.0 / 9.0; 9];

#[rustfmt::skip]
const GAUSSIAN: [f32; 9] = [
    1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0,
    2.0 / 16.0, 4.0 / 16.0, 2.0 / 16.0,
    1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0,
];

#[rustfmt::skip]
const EMBOSS: [f32; 9] = [
    -2.0, -1.0,  0.0,
    -1.0,  1.0,  1.0,
     0.0,  1.0,  2.0,
];

#[rustfmt::skip]
const IDENTITY: [f32; 9] = [
    0.0, 0.0, 0.0,
    0.0, 1.0, 0.0,
    0.0, 0.0, 0.0,
];

/// A square convolution kernel with an odd side length.
///
/// The weights are stored row-major, so the tap at kernel row `ky` and
/// column `kx` lives at index `ky * side + kx`. The odd side guarantees a
/// center tap that aligns with the output pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    weights: Vec<f32>,
    side: usize,
}

impl Kernel {
    /// Create a kernel from its side length and row-major weights.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::KernelSideEven`] when `side` is even and
    /// [`FilterError::KernelLengthMismatch`] when `weights.len()` is not
    /// `side * side`.
    ///
    /// # Example
    ///
    /// ```
    /// use filtra_imgproc::filter::kernels::Kernel;
    ///
    /// let box3 = Kernel::new(3, vec![1.0 / 9.0; 9]).unwrap();
    /// assert_eq!(box3.side(), 3);
    /// assert_eq!(box3.half(), 1);
    /// ```
    pub fn new(side: usize, weights: Vec<f32>) -> Result<Self, FilterError> {
        if side % 2 == 0 {
            return Err(FilterError::KernelSideEven(side));
        }
        if weights.len() != side * side {
            return Err(FilterError::KernelLengthMismatch(side, weights.len()));
        }
        Ok(Self { weights, side })
    }

    /// The side length of the kernel.
    pub fn side(&self) -> usize {
        self.side
    }

    /// The half-width `side / 2`, i.e. the reach of the kernel around its
    /// center tap.
    pub fn half(&self) -> usize {
        self.side / 2
    }

    /// The weight at kernel row `ky` and column `kx`.
    pub fn weight(&self, ky: usize, kx: usize) -> f32 {
        self.weights[ky * self.side + kx]
    }

    /// The row-major weights.
    pub fn as_slice(&self) -> &[f32] {
        &self.weights
    }
}

/// Look up a kernel from the built-in catalog by name.
///
/// Names are matched exactly; see [`FILTER_NAMES`] for the accepted set.
///
/// # Errors
///
/// Returns [`FilterError::UnknownFilter`] when `name` is not in the catalog.
///
/// # Example
///
/// ```
/// use filtra_imgproc::filter::kernels;
///
/// let kernel = kernels::lookup("sharpen").unwrap();
/// assert_eq!(kernel.weight(1, 1), 5.0);
/// ```
pub fn lookup(name: &str) -> Result<Kernel, FilterError> {
    let weights = match name {
        "edge" => EDGE,
        "sharpen" => SHARPEN,
        "blur" => BLUR,
        "gaussian" => GAUSSIAN,
        "emboss" => EMBOSS,
        "identity" => IDENTITY,
        _ => return Err(FilterError::UnknownFilter(name.to_string())),
    };
    Kernel::new(3, weights.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_covers_catalog() -> Result<(), FilterError> {
        for name in FILTER_NAMES {
            let kernel = lookup(name)?;
            assert_eq!(kernel.side(), 3);
            assert_eq!(kernel.as_slice().len(), 9);
        }
        Ok(())
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(matches!(
            lookup("Blur"),
            Err(FilterError::UnknownFilter(name)) if name == "Blur"
        ));
    }

    #[test]
    fn lookup_unknown_name() {
        assert!(matches!(
            lookup("median"),
            Err(FilterError::UnknownFilter(name)) if name == "median"
        ));
    }

    #[test]
    fn kernel_weight_sums() -> Result<(), FilterError> {
        // every catalog kernel preserves the mean except edge, which removes it
        for (name, expected) in [
            ("edge", 0.0),
            ("sharpen", 1.0),
            ("blur", 1.0),
            ("gaussian", 1.0),
            ("emboss", 1.0),
            ("identity", 1.0),
        ] {
            let sum = lookup(name)?.as_slice().iter().sum::<f32>();
            assert!((sum - expected).abs() < 1e-6, "{name} sums to {sum}");
        }
        Ok(())
    }

    #[test]
    fn kernel_rejects_even_side() {
        assert!(matches!(
            Kernel::new(4, vec![0.0; 16]),
            Err(FilterError::KernelSideEven(4))
        ));
    }

    #[test]
    fn kernel_rejects_length_mismatch() {
        assert!(matches!(
            Kernel::new(3, vec![0.0; 8]),
            Err(FilterError::KernelLengthMismatch(3, 8))
        ));
    }

    #[test]
    fn kernel_weight_indexing() -> Result<(), FilterError> {
        let kernel = lookup("emboss")?;
        assert_eq!(kernel.weight(0, 0), -2.0);
        assert_eq!(kernel.weight(0, 2), 0.0);
        assert_eq!(kernel.weight(2, 2), 2.0);
        Ok(())
    }
}
