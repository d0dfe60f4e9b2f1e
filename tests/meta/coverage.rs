//! Keeps the unit test tree in step with the source tree

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module declaration files carry no logic of their own
    fn is_structural(relative_path: &str) -> bool {
        let file_name = relative_path.rsplit('/').next().unwrap_or(relative_path);
        matches!(file_name, "main.rs" | "lib.rs" | "mod.rs")
    }

    fn tree(root: &str) -> BTreeSet<String> {
        let root = Path::new(root);
        collect_relative_paths(root, root).unwrap_or_else(|error| {
            assert!(!root.exists(), "Failed to read {}: {error}", root.display());
            BTreeSet::new()
        })
    }

    fn collect_relative_paths(dir: &Path, base: &Path) -> Result<BTreeSet<String>, io::Error> {
        let mut paths = BTreeSet::new();
        if !dir.is_dir() {
            return Ok(paths);
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative_path = path
                .strip_prefix(base)
                .map_err(|error| io::Error::other(format!("Failed to strip prefix: {error}")))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.insert(relative_path);
                paths.extend(collect_relative_paths(&path, base)?);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative_path);
            }
        }

        Ok(paths)
    }

    // Tests every source module has a mirrored unit test file
    // Verified by deleting one unit test file
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src_paths = tree(SRC_DIR);
        let test_paths = tree(UNIT_DIR);

        let missing: Vec<String> = src_paths
            .iter()
            .filter(|path| !is_structural(path) && !test_paths.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "The following src files/directories are missing unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    // Tests no unit test file outlives its source module
    // Verified by adding a unit test file with no source
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src_paths = tree(SRC_DIR);
        let test_paths = tree(UNIT_DIR);

        let orphaned: Vec<String> = test_paths
            .iter()
            .filter(|path| !is_structural(path) && !src_paths.contains(*path))
            .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "The following unit test files/directories have no corresponding src files:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests every non-structural test file defines at least one test
    // Verified by emptying one test module
    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_dir = Path::new("tests");
        let mut files_without_tests = Vec::new();

        for relative_path in tree("tests") {
            if is_structural(&relative_path) || !relative_path.ends_with(".rs") {
                continue;
            }
            let path = tests_dir.join(&relative_path);
            let content = fs::read_to_string(&path).unwrap_or_default();
            if !content.contains("#[test]") {
                files_without_tests.push(format!("  - {}", path.display()));
            }
        }

        assert!(
            files_without_tests.is_empty(),
            "The following test files don't contain any #[test] functions:\n{}",
            files_without_tests.join("\n")
        );
    }
}
