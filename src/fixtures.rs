#[cfg(test)]
pub mod test {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    /// Build the canonical fixture tree used across test modules.
    ///
    /// ```text
    /// root/
    ///   foo.yml               (real, env-sectioned YAML)
    ///   foo.yml.example
    ///   bar.yml               (real)
    ///   bar.yml.example
    ///   rendered.txt          (real, contains a ${VAR} placeholder)
    ///   rendered.txt.example
    ///   dummy1.yml.example    (no real counterpart)
    ///   dummy1-alt.yml.alt
    ///   morrowind.yml.alt
    ///   settings.example/     (example dir with nested content)
    ///   alt_settings.alt/
    ///   nest1/
    ///     dummy2.yml.example
    ///     mars.yml.example
    ///     dummy2-alt.yml.alt
    ///     venus.yml.alt
    ///     nest2/
    ///       harambe.yml.example
    ///       kvatch.yml.alt
    /// ```
    pub fn sample_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        let foo = "development:\n  foo: development\ntest:\n  foo: test\nproduction:\n  foo: production\n";
        fs::write(root.join("foo.yml"), foo).unwrap();
        fs::write(root.join("foo.yml.example"), foo).unwrap();

        let bar = "development:\n  bar: development\nproduction:\n  bar: production\n";
        fs::write(root.join("bar.yml"), bar).unwrap();
        fs::write(root.join("bar.yml.example"), bar).unwrap();

        let rendered = "greeting: hello ${CONFTREE_FIXTURE_NAME}\n";
        fs::write(root.join("rendered.txt"), rendered).unwrap();
        fs::write(root.join("rendered.txt.example"), rendered).unwrap();

        fs::write(root.join("dummy1.yml.example"), "dummy1: example\n").unwrap();
        fs::write(root.join("dummy1-alt.yml.alt"), "dummy1: alt\n").unwrap();
        fs::write(root.join("morrowind.yml.alt"), "nerevar: moon-and-star\n").unwrap();

        let nest1 = root.join("nest1");
        let nest2 = nest1.join("nest2");
        fs::create_dir_all(&nest2).unwrap();
        fs::write(nest1.join("dummy2.yml.example"), "dummy2: example\n").unwrap();
        fs::write(nest1.join("mars.yml.example"), "planet: mars\n").unwrap();
        fs::write(nest1.join("dummy2-alt.yml.alt"), "dummy2: alt\n").unwrap();
        fs::write(nest1.join("venus.yml.alt"), "planet: venus\n").unwrap();
        fs::write(
            nest2.join("harambe.yml.example"),
            "development:\n  harambe: RIP (development)\ntest:\n  harambe: RIP (test)\n",
        )
        .unwrap();
        fs::write(nest2.join("kvatch.yml.alt"), "oblivion: gate\n").unwrap();

        let settings = root.join("settings.example");
        fs::create_dir_all(settings.join("sub")).unwrap();
        fs::write(settings.join("inner.yml"), "inner: 1\n").unwrap();
        fs::write(settings.join("sub").join("deep.yml"), "deep: 2\n").unwrap();

        fs::create_dir(root.join("alt_settings.alt")).unwrap();
        fs::write(root.join("alt_settings.alt").join("only.yml"), "only: 1\n").unwrap();

        dir
    }

    /// Directory enumeration order is filesystem-dependent; tests that don't
    /// assert ordering compare sorted sequences.
    pub fn sorted(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
        paths.sort();
        paths
    }
}
