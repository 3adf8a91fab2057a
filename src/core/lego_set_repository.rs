use crate::core::repository::{self, Repository};
use crate::core::{ConfigProvider, LegoSet, Storage};
use crate::utils::error::{BricksetError, Result};
use std::collections::BTreeMap;
use std::io::Write;

/// 未指定包裝類型時使用的值
pub const NOT_SPECIFIED: &str = "NOT_SPECIFIED";

/// `LegoSet` 專用的固定查詢；底層資料由 [`Repository`] 持有
#[derive(Debug, Clone)]
pub struct LegoSetRepository {
    repository: Repository<LegoSet>,
}

impl LegoSetRepository {
    pub fn new(repository: Repository<LegoSet>) -> Self {
        Self { repository }
    }

    pub fn load<S: Storage>(storage: &S, path: &str) -> Result<Self> {
        repository::load_from(storage, path).map(Self::new)
    }

    pub fn from_config<S: Storage, C: ConfigProvider>(storage: &S, config: &C) -> Result<Self> {
        Self::load(storage, config.data_path())
    }

    pub fn get_all(&self) -> &[LegoSet] {
        self.repository.get_all()
    }

    /// 有指定標籤 (大小寫敏感) 的套組數量；沒有標籤的套組不計
    pub fn count_with_tag(&self, tag: &str) -> usize {
        self.repository.count(|set| {
            set.tags
                .as_ref()
                .is_some_and(|tags| tags.contains(tag))
        })
    }

    /// 指定包裝類型的套組名稱，依字母排序。空字串視為 `NOT_SPECIFIED`
    pub fn names_with_packaging_type(&self, packaging_type: &str) -> Vec<&str> {
        let wanted = if packaging_type.is_empty() {
            NOT_SPECIFIED
        } else {
            packaging_type
        };

        self.repository
            .sorted_by_key(|set| set.name.as_str())
            .into_iter()
            .filter(|set| set.packaging_type.as_str().eq_ignore_ascii_case(wanted))
            .map(|set| set.name.as_str())
            .collect()
    }

    /// 兩個年份之間 (含) 發行的套組；年份順序不拘，結果維持載入順序
    pub fn sets_between_years(&self, year1: i32, year2: i32) -> Vec<&LegoSet> {
        let (from, to) = if year1 > year2 {
            (year2, year1)
        } else {
            (year1, year2)
        };
        self.repository
            .filter(|set| (from..=to).contains(&set.year))
    }

    pub fn count_with_dimensions(&self) -> usize {
        self.repository.count(|set| set.dimensions.is_some())
    }

    /// 重量不超過 `weight` 的套組名稱；沒有尺寸或重量的套組一律排除
    pub fn names_with_max_weight(&self, weight: f64) -> Vec<&str> {
        self.repository
            .iter()
            .filter(|set| {
                set.dimensions
                    .as_ref()
                    .and_then(|d| d.weight)
                    .is_some_and(|w| w <= weight)
            })
            .map(|set| set.name.as_str())
            .collect()
    }

    /// 零件最多的套組名稱；同數量時取第一筆
    pub fn name_with_most_pieces(&self) -> Result<&str> {
        self.repository
            .max_by_key(|set| set.pieces)
            .map(|set| set.name.as_str())
            .ok_or(BricksetError::EmptyCollection {
                operation: "name_with_most_pieces",
            })
    }

    pub fn count_by_theme(&self) -> BTreeMap<&str, usize> {
        self.repository
            .group_by(|set| set.theme.as_str())
            .into_iter()
            .map(|(theme, sets)| (theme, sets.len()))
            .collect()
    }

    pub fn total_pieces(&self) -> u64 {
        self.repository.iter().map(|set| u64::from(set.pieces)).sum()
    }

    pub fn print_names_with_packaging_type<W: Write>(
        &self,
        packaging_type: &str,
        out: &mut W,
    ) -> Result<()> {
        for name in self.names_with_packaging_type(packaging_type) {
            writeln!(out, "{}", name)?;
        }
        Ok(())
    }

    pub fn print_sets_between_years<W: Write>(&self, year1: i32, year2: i32, out: &mut W) -> Result<()> {
        for set in self.sets_between_years(year1, year2) {
            writeln!(out, "{}", set)?;
        }
        Ok(())
    }

    pub fn print_names_with_max_weight<W: Write>(&self, weight: f64, out: &mut W) -> Result<()> {
        for name in self.names_with_max_weight(weight) {
            writeln!(out, "{}", name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Dimensions, PackagingType};
    use std::collections::BTreeSet;

    fn set(name: &str, year: i32, pieces: u32) -> LegoSet {
        LegoSet {
            number: format!("{}-1", name),
            name: name.to_string(),
            year,
            theme: "Town".to_string(),
            subtheme: None,
            theme_group: None,
            packaging_type: PackagingType::Box,
            availability: None,
            tags: None,
            pieces,
            minifigs: None,
            dimensions: None,
        }
    }

    fn with_tags(mut lego_set: LegoSet, tags: &[&str]) -> LegoSet {
        lego_set.tags = Some(tags.iter().map(|t| t.to_string()).collect::<BTreeSet<_>>());
        lego_set
    }

    fn with_weight(mut lego_set: LegoSet, weight: Option<f64>) -> LegoSet {
        lego_set.dimensions = Some(Dimensions {
            weight,
            ..Dimensions::default()
        });
        lego_set
    }

    fn with_packaging(mut lego_set: LegoSet, packaging_type: PackagingType) -> LegoSet {
        lego_set.packaging_type = packaging_type;
        lego_set
    }

    fn repo(sets: Vec<LegoSet>) -> LegoSetRepository {
        LegoSetRepository::new(Repository::from_records(sets))
    }

    #[test]
    fn test_count_with_tag_is_exact_and_case_sensitive() {
        let repo = repo(vec![
            with_tags(set("A", 2000, 1), &["Microscale", "Castle"]),
            with_tags(set("B", 2000, 1), &["microscale"]),
            with_tags(set("C", 2000, 1), &[]),
            set("D", 2000, 1),
            with_tags(set("E", 2000, 1), &["Microscale"]),
        ]);

        assert_eq!(repo.count_with_tag("Microscale"), 2);
        assert_eq!(repo.count_with_tag("microscale"), 1);
        assert_eq!(repo.count_with_tag("Micro"), 0);
    }

    #[test]
    fn test_count_with_tag_without_any_tags_is_zero() {
        let repo = repo(vec![set("A", 2000, 1), set("B", 2001, 2)]);
        assert_eq!(repo.count_with_tag("anything"), 0);
        assert_eq!(repo.count_with_tag(""), 0);
    }

    #[test]
    fn test_names_with_packaging_type_sorted_and_case_insensitive() {
        let repo = repo(vec![
            set("Zeta", 2000, 1),
            with_packaging(set("Beta", 2000, 1), PackagingType::Polybag),
            set("Alpha", 2000, 1),
            set("Alpha", 2001, 1),
        ]);

        assert_eq!(repo.names_with_packaging_type("Box"), vec!["Alpha", "Alpha", "Zeta"]);
        assert_eq!(repo.names_with_packaging_type("BOX"), repo.names_with_packaging_type("box"));
        assert_eq!(repo.names_with_packaging_type("polybag"), vec!["Beta"]);
        assert!(repo.names_with_packaging_type("tub").is_empty());
    }

    #[test]
    fn test_empty_packaging_type_means_not_specified() {
        let repo = repo(vec![
            with_packaging(set("Y", 2000, 1), PackagingType::NotSpecified),
            set("Boxed", 2000, 1),
            with_packaging(set("X", 2000, 1), PackagingType::NotSpecified),
        ]);

        assert_eq!(repo.names_with_packaging_type(""), vec!["X", "Y"]);
        assert_eq!(
            repo.names_with_packaging_type(""),
            repo.names_with_packaging_type("NOT_SPECIFIED")
        );
    }

    #[test]
    fn test_packaging_type_matches_full_text_only() {
        let repo = repo(vec![with_packaging(
            set("Backed", 2000, 1),
            PackagingType::BoxWithBackingCard,
        )]);
        assert!(repo.names_with_packaging_type("box").is_empty());
        assert_eq!(
            repo.names_with_packaging_type("box_with_backing_card"),
            vec!["Backed"]
        );
    }

    #[test]
    fn test_sets_between_years_swaps_bounds_and_keeps_order() {
        let repo = repo(vec![set("X", 2005, 1), set("Y", 2009, 1), set("Z", 2012, 1)]);

        let names = |sets: Vec<&LegoSet>| sets.iter().map(|s| s.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(repo.sets_between_years(2012, 2009)), vec!["Y", "Z"]);
        assert_eq!(
            repo.sets_between_years(2012, 2009),
            repo.sets_between_years(2009, 2012)
        );
        assert_eq!(names(repo.sets_between_years(2009, 2009)), vec!["Y"]);
        assert!(repo.sets_between_years(2006, 2008).is_empty());
    }

    #[test]
    fn test_count_with_dimensions_counts_presence_only() {
        let repo = repo(vec![
            with_weight(set("A", 2000, 1), None),
            set("B", 2000, 1),
            with_weight(set("C", 2000, 1), Some(0.5)),
        ]);
        assert_eq!(repo.count_with_dimensions(), 2);
    }

    #[test]
    fn test_names_with_max_weight_is_inclusive_and_skips_absent() {
        let repo = repo(vec![
            with_weight(set("Heavy", 2000, 1), Some(2.0)),
            with_weight(set("Exact", 2000, 1), Some(0.1)),
            with_weight(set("NoWeight", 2000, 1), None),
            set("NoDimensions", 2000, 1),
            with_weight(set("Light", 2000, 1), Some(0.05)),
        ]);

        assert_eq!(repo.names_with_max_weight(0.1), vec!["Exact", "Light"]);
        assert_eq!(
            repo.names_with_max_weight(f64::MAX),
            vec!["Heavy", "Exact", "Light"]
        );
        assert!(repo.names_with_max_weight(f64::NAN).is_empty());
    }

    #[test]
    fn test_name_with_most_pieces_first_on_tie() {
        let repo = repo(vec![set("A", 2000, 10), set("B", 2000, 50), set("C", 2000, 50)]);
        assert_eq!(repo.name_with_most_pieces().unwrap(), "B");
    }

    #[test]
    fn test_empty_store() {
        let repo = repo(Vec::new());

        assert_eq!(repo.count_with_tag("anything"), 0);
        assert_eq!(repo.count_with_dimensions(), 0);
        assert!(repo.names_with_max_weight(100.0).is_empty());
        assert!(repo.names_with_packaging_type("").is_empty());
        assert!(repo.sets_between_years(0, 3000).is_empty());
        assert!(repo.count_by_theme().is_empty());
        assert_eq!(repo.total_pieces(), 0);
        assert!(matches!(
            repo.name_with_most_pieces(),
            Err(BricksetError::EmptyCollection { .. })
        ));
    }

    #[test]
    fn test_count_by_theme_and_total_pieces() {
        let mut castle = set("Keep", 1990, 300);
        castle.theme = "Castle".to_string();
        let repo = repo(vec![set("A", 2000, 100), castle, set("B", 2001, 5)]);

        let themes = repo.count_by_theme();
        assert_eq!(themes.into_iter().collect::<Vec<_>>(), vec![("Castle", 1), ("Town", 2)]);
        assert_eq!(repo.total_pieces(), 405);
    }

    #[test]
    fn test_print_variants_write_one_line_per_item() {
        let repo = repo(vec![
            with_weight(set("Zeta", 2009, 1), Some(0.1)),
            set("Alpha", 2010, 1),
        ]);

        let mut out = Vec::new();
        repo.print_names_with_packaging_type("box", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Alpha\nZeta\n");

        let mut out = Vec::new();
        repo.print_names_with_max_weight(0.1, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Zeta\n");

        let mut out = Vec::new();
        repo.print_sets_between_years(2010, 2009, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Zeta-1 Zeta (2009)"));
        assert!(lines[1].starts_with("Alpha-1 Alpha (2010)"));
    }
}
