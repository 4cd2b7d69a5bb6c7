#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use sql_dump_trim::test_utils::{repeated_inserts, SAMPLE_DUMP};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sql_dump_trim_cmd() -> Command {
        Command::cargo_bin("sql-dump-trim").unwrap()
    }

    fn dump_file(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    mod usage {
        use super::*;

        #[test]
        fn test_no_arguments() {
            sql_dump_trim_cmd()
                .assert()
                .failure()
                .code(1)
                .stdout(predicate::str::contains(
                    "Usage: sql-dump-trim [InFile] [OutFile] [TableName] ...",
                ))
                .stdout(predicate::str::contains("Starting").not());
        }
    }

    mod census {
        use super::*;

        #[test]
        fn test_census() {
            let dump = dump_file(&repeated_inserts(&[("users", 2), ("logs", 5)]));
            sql_dump_trim_cmd()
                .arg(dump.path())
                .assert()
                .success()
                .stdout(predicate::str::starts_with(format!(
                    "\nStarting sql-dump-trim - v{}\n",
                    env!("CARGO_PKG_VERSION")
                )))
                .stdout(predicate::str::contains(
                    "\tCount\tTableName\n\t-----\t---------\n\t5\tlogs\n\t2\tusers\n",
                ))
                .stdout(predicate::str::ends_with("\nDone.\n\n"))
                .stderr("");
        }

        #[test]
        fn test_census_without_inserts() {
            let dump = dump_file("CREATE TABLE t1 (a int);\n");
            sql_dump_trim_cmd()
                .arg(dump.path())
                .assert()
                .success()
                .stdout(predicate::str::contains(
                    "\tCount\tTableName\n\t-----\t---------\n\nDone.",
                ));
        }

        #[test]
        fn test_census_missing_file() {
            sql_dump_trim_cmd()
                .arg("/definitely/not/here.sql")
                .assert()
                .failure()
                .code(1)
                .stdout(predicate::str::contains(
                    "\nERROR: File \"/definitely/not/here.sql\" not found.\n\nTerminating Process.\n",
                ));
        }

        #[test]
        fn test_census_malformed_insert() {
            let dump = dump_file("-- header\nINSERT INTO \n");
            sql_dump_trim_cmd()
                .arg(dump.path())
                .assert()
                .failure()
                .code(1)
                .stdout(predicate::str::contains(
                    "ERROR: Malformed INSERT statement on line 2",
                ));
        }
    }

    mod rewrite {
        use super::*;

        #[test]
        fn test_rewrite() {
            let dump = dump_file("INSERT INTO users VALUES (1,'a'),(2,'b');\n");
            let dir = tempfile::tempdir().unwrap();
            let output = dir.path().join("out.sql");
            sql_dump_trim_cmd()
                .arg(dump.path())
                .arg(&output)
                .assert()
                .success()
                .stdout(predicate::str::contains("Processing Input File:"))
                .stdout(predicate::str::contains("(will be overwritten)").not())
                .stdout(predicate::str::contains("Reformatting").not())
                .stdout(predicate::str::ends_with("\nDone.\n\n"))
                .stderr("");
            assert_eq!(
                std::fs::read_to_string(&output).unwrap(),
                "INSERT INTO users VALUES (1,'a'),\n\t(2,'b');\n"
            );
        }

        #[test]
        fn test_rewrite_with_excluded_table() {
            let dump = dump_file(SAMPLE_DUMP);
            let dir = tempfile::tempdir().unwrap();
            let output = dir.path().join("out.sql");
            let assert = sql_dump_trim_cmd()
                .arg(dump.path())
                .arg(&output)
                .arg("audit_log")
                .assert()
                .success()
                .stdout(predicate::str::contains(
                    "Reformatting of SQL enabled (default)\n\nTables requested to exclude: audit_log\n",
                ))
                .stdout(predicate::str::contains("\nLines with TIMESTAMP(6) modified: 1\n"));
            let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
            assert_eq!(stdout.matches("Excluded INSERTS for: audit_log").count(), 1);

            let rewritten = std::fs::read_to_string(&output).unwrap();
            assert!(!rewritten.contains("INSERT INTO `audit_log`"));
            assert!(rewritten.contains("INSERT INTO `users` VALUES (1,'a'),\n\t(2,'b');\n"));
        }

        #[test]
        fn test_rewrite_no_reformat() {
            let dump = dump_file("INSERT INTO a VALUES (1),(2);\nINSERT INTO b VALUES (1),(2);\n");
            let dir = tempfile::tempdir().unwrap();
            let output = dir.path().join("out.sql");
            sql_dump_trim_cmd()
                .arg(dump.path())
                .arg(&output)
                .arg("--NoReformat")
                .arg("b")
                .assert()
                .success()
                .stdout(predicate::str::contains("Reformatting of SQL disabled\n"))
                .stdout(predicate::str::contains("Tables requested to exclude: b\n"))
                .stdout(predicate::str::contains("   Excluded INSERTS for: b\n"));
            assert_eq!(
                std::fs::read_to_string(&output).unwrap(),
                "INSERT INTO a VALUES (1),(2);\n"
            );
        }

        #[test]
        fn test_rewrite_overwrites_existing_output() {
            let dump = dump_file("INSERT INTO a VALUES (1),(2);\n");
            let existing = dump_file("old content\n");
            sql_dump_trim_cmd()
                .arg(dump.path())
                .arg(existing.path())
                .assert()
                .success()
                .stdout(predicate::str::contains("(will be overwritten)\n"));
            assert_eq!(
                std::fs::read_to_string(existing.path()).unwrap(),
                "INSERT INTO a VALUES (1),\n\t(2);\n"
            );
        }

        #[test]
        fn test_rewrite_same_file() {
            let dump = dump_file("INSERT INTO a VALUES (1),(2);\n");
            sql_dump_trim_cmd()
                .arg(dump.path())
                .arg(dump.path())
                .assert()
                .failure()
                .code(1)
                .stdout(predicate::str::contains(
                    "\nERROR: Input and Output cannot be the same file.\n",
                ));
            assert_eq!(
                std::fs::read_to_string(dump.path()).unwrap(),
                "INSERT INTO a VALUES (1),(2);\n"
            );
        }

        #[test]
        fn test_rewrite_missing_input() {
            let dir = tempfile::tempdir().unwrap();
            let output = dir.path().join("out.sql");
            sql_dump_trim_cmd()
                .arg(dir.path().join("missing.sql"))
                .arg(&output)
                .assert()
                .failure()
                .code(1)
                .stdout(predicate::str::contains("not found."));
            assert!(!output.exists());
        }
    }
}
