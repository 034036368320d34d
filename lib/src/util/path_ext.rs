use std::borrow::Cow;
use std::path::Path;

pub trait PathExt: AsRef<Path> {
    /// The path with its final extension removed. Paths ending in a separator
    /// or without an extension are returned unchanged.
    fn without_extension(&self) -> Cow<'_, Path>;
}

impl PathExt for Path {
    fn without_extension(&self) -> Cow<'_, Path> {
        match self.extension() {
            Some(_) => Cow::Owned(self.with_extension("")),
            None => Cow::Borrowed(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::PathExt;

    #[test]
    fn strips_only_the_final_extension() {
        assert_eq!(Path::new("23 b.JPEG").without_extension(), Path::new("23 b"));
        assert_eq!(Path::new("text/1.JPEG").without_extension(), Path::new("text/1"));
        assert_eq!(Path::new("archive.tar.gz").without_extension(), Path::new("archive.tar"));
        assert_eq!(Path::new("noext").without_extension(), Path::new("noext"));
        assert_eq!(Path::new(".hidden").without_extension(), Path::new(".hidden"));
    }
}
