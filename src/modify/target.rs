use crate::extension::Extension;

/// One extension or a sequence of them, as accepted by the update combinators.
///
/// The output mirrors the input: a single extension yields a single extension,
/// a sequence yields a vector of the same length and order.
pub trait ExtensionTarget {
    type Output;

    /// Produce a new record for every extension in the target.
    fn map_each<M>(self, map: M) -> Self::Output
    where
        M: FnMut(&Extension) -> Extension;

    /// Short description used in log output.
    fn describe(&self) -> String;
}

impl ExtensionTarget for &Extension {
    type Output = Extension;

    fn map_each<M>(self, mut map: M) -> Extension
    where
        M: FnMut(&Extension) -> Extension,
    {
        map(self)
    }

    fn describe(&self) -> String {
        format!("extension of {}", self.slot())
    }
}

impl ExtensionTarget for &[Extension] {
    type Output = Vec<Extension>;

    fn map_each<M>(self, map: M) -> Vec<Extension>
    where
        M: FnMut(&Extension) -> Extension,
    {
        self.iter().map(map).collect()
    }

    fn describe(&self) -> String {
        format!("{} extensions", self.len())
    }
}

impl ExtensionTarget for &Vec<Extension> {
    type Output = Vec<Extension>;

    fn map_each<M>(self, map: M) -> Vec<Extension>
    where
        M: FnMut(&Extension) -> Extension,
    {
        self.as_slice().map_each(map)
    }

    fn describe(&self) -> String {
        self.as_slice().describe()
    }
}

impl<const N: usize> ExtensionTarget for &[Extension; N] {
    type Output = Vec<Extension>;

    fn map_each<M>(self, map: M) -> Vec<Extension>
    where
        M: FnMut(&Extension) -> Extension,
    {
        self.as_slice().map_each(map)
    }

    fn describe(&self) -> String {
        self.as_slice().describe()
    }
}
