use crate::extension::Extension;

/// Collection of extensions contributed by one crate or feature.
pub trait ExtensionPackage {
    type Extensions<'a>: IntoIterator<Item = Extension>
    where
        Self: 'a;

    fn extensions(&self) -> Self::Extensions<'_>;
}

impl ExtensionPackage for Vec<Extension> {
    type Extensions<'a>
        = std::iter::Cloned<std::slice::Iter<'a, Extension>>
    where
        Self: 'a;

    fn extensions(&self) -> Self::Extensions<'_> {
        self.iter().cloned()
    }
}

/// Concatenate the extensions of every package into one pool, keeping package
/// order and the order within each package.
pub fn collect_packages<'p, P>(packages: impl IntoIterator<Item = &'p P>) -> Vec<Extension>
where
    P: ExtensionPackage + 'p,
{
    packages
        .into_iter()
        .flat_map(|package| package.extensions())
        .collect()
}
