use std::path::PathBuf;

xflags::xflags! {
    /// Generates the gallery's embroidery data from its markdown content.
    cmd merklap {
        /// Site root; relative paths in the settings resolve against it.
        optional -r, --root root: PathBuf
        /// Settings file. Defaults to `merklap.toml` in the site root.
        optional -c, --config config: PathBuf
        /// How body sections map to descriptions: `position` or `title-match`.
        optional --sections sections: String

        /// Build the catalog and write the generated script.
        cmd build {
            /// Write the script here instead of the configured output.
            optional -o, --output output: PathBuf
        }

        /// Report content problems without writing anything.
        cmd check {}
    }
}
