use bitflags::bitflags;

bitflags! {
    /// What a module contributed to the build.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Capabilities: u8 {
        const SCRIPT = 1 << 0;
        const STYLE = 1 << 1;
        const SETUP = 1 << 2;
        const ASSETS = 1 << 3;
    }
}

impl Capabilities {
    #[must_use]
    pub const fn has_script(self) -> bool {
        self.contains(Self::SCRIPT)
    }

    #[must_use]
    pub const fn has_style(self) -> bool {
        self.contains(Self::STYLE)
    }

    #[must_use]
    pub const fn has_setup(self) -> bool {
        self.contains(Self::SETUP)
    }

    #[must_use]
    pub const fn has_assets(self) -> bool {
        self.contains(Self::ASSETS)
    }
}

impl std::fmt::Display for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<&str> = self.iter_names().map(|(name, _)| name).collect();
        f.write_str(&names.join("|").to_lowercase())
    }
}
