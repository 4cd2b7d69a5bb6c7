pub static SCHEMA_ONLY_DUMP: &str = "\
-- MySQL dump 10.13  Distrib 8.0.36, for Linux (x86_64)
--
-- Host: localhost    Database: shop
-- ------------------------------------------------------

DROP TABLE IF EXISTS `users`;
CREATE TABLE `users` (
  `id` int NOT NULL AUTO_INCREMENT,
  `name` varchar(64) NOT NULL,
  `created_at` timestamp(6) NOT NULL DEFAULT CURRENT_TIMESTAMP(6),
  PRIMARY KEY (`id`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;
";

pub static SAMPLE_DUMP: &str = "\
-- MySQL dump 10.13  Distrib 8.0.36, for Linux (x86_64)

DROP TABLE IF EXISTS `audit_log`;
CREATE TABLE `audit_log` (
  `id` int NOT NULL,
  `at` TIMESTAMP(6) NOT NULL DEFAULT CURRENT_TIMESTAMP(6)
) ENGINE=InnoDB;

LOCK TABLES `audit_log` WRITE;
INSERT INTO `audit_log` VALUES (1,'2024-01-01 00:00:00.000000'),(2,'2024-01-02 00:00:00.000000');
INSERT INTO `audit_log` VALUES (3,'2024-01-03 00:00:00.000000');
UNLOCK TABLES;

DROP TABLE IF EXISTS `users`;
CREATE TABLE `users` (
  `id` int NOT NULL,
  `name` varchar(64) NOT NULL
) ENGINE=InnoDB;

LOCK TABLES `users` WRITE;
INSERT INTO `users` VALUES (1,'a'),(2,'b');
UNLOCK TABLES;
";

/// A dump holding `count` single-row INSERT statements for each `(table, count)`, in order.
pub fn repeated_inserts(tables: &[(&str, usize)]) -> String {
    let mut dump = String::new();
    for (table, count) in tables {
        for i in 0..*count {
            dump.push_str(&format!("INSERT INTO {} VALUES ({});\n", table, i));
        }
    }
    dump
}
