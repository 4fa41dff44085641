//! Unit tests for page extraction

use super::*;

const ADVANCED_TABLE: &str = r#"
<table id="advanced" class="stats_table">
  <thead><tr><th data-stat="year_id">Season</th><th data-stat="ts_pct">TS%</th></tr></thead>
  <tbody>
    <tr id="advanced.2007"><th data-stat="year_id"><a href="/players/x/a.html">2007-08</a></th><td data-stat="age">20</td><td data-stat="ts_pct">.552</td></tr>
    <tr id="advanced.2008"><th data-stat="year_id"><a href="/players/x/b.html">2008-09</a></th><td data-stat="age">21</td><td data-stat="ts_pct">.610</td></tr>
    <tr class="thead"><th data-stat="year_id">Season</th><td data-stat="ts_pct">TS%</td></tr>
    <tr id="advanced.2009"><th data-stat="year_id"><a href="/players/x/c.html">2009-10</a></th><td data-stat="age">22</td><td data-stat="ts_pct"></td></tr>
    <tr id="advanced.2010"><th data-stat="year_id"><a href="/players/x/d.html">2010-11</a></th><td data-stat="age">23</td><td data-stat="ts_pct">.589</td></tr>
  </tbody>
  <tfoot><tr><th data-stat="year_id">Career</th><td data-stat="ts_pct">.590</td></tr></tfoot>
</table>
"#;

const POSTSEASON_TABLE: &str = r#"
<table id="advanced_post" class="stats_table">
  <tbody>
    <tr><th data-stat="year_id"><a href="/playoffs/NBA_2009.html">2008-09</a></th><td data-stat="ts_pct">.574</td></tr>
    <tr><th data-stat="year_id"><a href="/playoffs/NBA_2011.html">2010-11</a></th><td data-stat="ts_pct">.601</td></tr>
  </tbody>
</table>
"#;

fn page(body: &str) -> String {
    format!("<html><head><title>Player</title></head><body><div id=\"content\">{body}</div></body></html>")
}

fn commented(table: &str) -> String {
    format!("<div class=\"placeholder\"></div>\n<!--\n{table}\n-->")
}

fn season(label: &str) -> SeasonKey {
    label.parse().unwrap()
}

#[cfg(test)]
mod season_table_tests {
    use super::*;

    #[test]
    fn test_extracts_rows_in_document_order() {
        let stats =
            extract_season_stats(&page(ADVANCED_TABLE), StatTable::RegularAdvanced).unwrap();

        let seasons: Vec<String> = stats.iter().map(|s| s.season.to_string()).collect();
        assert_eq!(seasons, vec!["2007-08", "2008-09", "2010-11"]);
        assert_eq!(stats[1].player_statistic, 0.61);
        assert_eq!(stats[0].player_statistic, 0.552);
    }

    #[test]
    fn test_blank_stat_is_skipped_not_zero() {
        let stats =
            extract_season_stats(&page(ADVANCED_TABLE), StatTable::RegularAdvanced).unwrap();
        assert!(stats.iter().all(|s| s.season != season("2009-10")));
        assert!(stats.iter().all(|s| s.player_statistic != 0.0));
    }

    #[test]
    fn test_non_numeric_stat_is_skipped() {
        let table = r#"<table id="advanced"><tbody>
            <tr><th data-stat="year_id"><a>2015-16</a></th><td data-stat="ts_pct">Did Not Play</td></tr>
            <tr><th data-stat="year_id"><a>2016-17</a></th><td data-stat="ts_pct">.501</td></tr>
        </tbody></table>"#;
        let stats = extract_season_stats(&page(table), StatTable::RegularAdvanced).unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].season, season("2016-17"));
    }

    #[test]
    fn test_row_without_season_label_is_skipped() {
        let table = r#"<table id="advanced"><tbody>
            <tr><th data-stat="year_id"></th><td data-stat="ts_pct">.530</td></tr>
            <tr><td data-stat="ts_pct">.540</td></tr>
            <tr><th data-stat="year_id"><a>2001-02</a></th><td data-stat="ts_pct">.550</td></tr>
        </tbody></table>"#;
        let stats = extract_season_stats(&page(table), StatTable::RegularAdvanced).unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].player_statistic, 0.55);
    }

    #[test]
    fn test_multi_team_season_keeps_first_row() {
        let table = r#"<table id="advanced"><tbody>
            <tr><th data-stat="year_id"><a>2018-19</a></th><td data-stat="team_id">TOT</td><td data-stat="ts_pct">.560</td></tr>
            <tr class="partial_table"><th data-stat="year_id"><a>2018-19</a></th><td data-stat="team_id">PHO</td><td data-stat="ts_pct">.520</td></tr>
            <tr class="partial_table"><th data-stat="year_id"><a>2018-19</a></th><td data-stat="team_id">MIA</td><td data-stat="ts_pct">.600</td></tr>
        </tbody></table>"#;
        let stats = extract_season_stats(&page(table), StatTable::RegularAdvanced).unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].player_statistic, 0.56);
    }

    #[test]
    fn test_older_season_attribute_and_unlinked_label() {
        let table = r#"<table id="advanced"><tbody>
            <tr><th data-stat="season">1996-97</th><td data-stat="ts_pct">.545</td></tr>
        </tbody></table>"#;
        let stats = extract_season_stats(&page(table), StatTable::RegularAdvanced).unwrap();
        assert_eq!(
            stats,
            vec![PlayerSeasonStat {
                season: season("1996-97"),
                player_statistic: 0.545,
            }]
        );
    }

    #[test]
    fn test_missing_table_yields_empty() {
        let stats =
            extract_season_stats(&page(ADVANCED_TABLE), StatTable::PostseasonAdvanced).unwrap();
        assert!(stats.is_empty());

        let stats = extract_season_stats("", StatTable::RegularAdvanced).unwrap();
        assert!(stats.is_empty());
    }

    #[test]
    fn test_postseason_fallback_table_id() {
        let table = POSTSEASON_TABLE.replace("advanced_post", "playoffs_advanced");
        let stats = extract_season_stats(&page(&table), StatTable::PostseasonAdvanced).unwrap();
        assert_eq!(stats.len(), 2);
    }
}

#[cfg(test)]
mod comment_tests {
    use super::*;

    #[test]
    fn test_strip_comment_markers() {
        assert_eq!(strip_comment_markers("a<!--b-->c"), "abc");
        assert_eq!(strip_comment_markers("<!-- x --><!--y-->"), " x y");
        assert_eq!(strip_comment_markers("plain"), "plain");
    }

    #[test]
    fn test_commented_table_matches_plain_table() {
        let plain =
            extract_season_stats(&page(POSTSEASON_TABLE), StatTable::PostseasonAdvanced).unwrap();
        let hidden =
            extract_season_stats(&page(&commented(POSTSEASON_TABLE)), StatTable::PostseasonAdvanced)
                .unwrap();

        assert_eq!(plain.len(), 2);
        assert_eq!(plain, hidden);
    }

    #[test]
    fn test_commented_table_is_invisible_without_stripping() {
        let document = Html::parse_document(&page(&commented(POSTSEASON_TABLE)));
        let stats = season_stats(&document, StatTable::PostseasonAdvanced).unwrap();
        assert!(stats.is_empty());
    }

    #[test]
    fn test_extract_player_page_reads_both_tables() {
        let raw = page(&format!("{ADVANCED_TABLE}{}", commented(POSTSEASON_TABLE)));
        let player = extract_player_page(&raw).unwrap();

        assert_eq!(player.regular.len(), 3);
        assert_eq!(player.postseason.len(), 2);
        assert_eq!(player.postseason[0].season, season("2008-09"));
    }
}

#[cfg(test)]
mod league_average_tests {
    use super::*;

    const LEAGUE_PAGE: &str = r#"<html><body>
        <table id="advanced-team"><tbody>
          <tr><th data-stat="team">Boston Celtics</th><td data-stat="ts_pct">.568</td></tr>
        </tbody>
        <tfoot><tr><th data-stat="team">League Average</th><td data-stat="ts_pct">.544</td></tr></tfoot>
        </table>
        <table id="other"><tfoot><tr><td data-stat="ts_pct">.999</td></tr></tfoot></table>
    </body></html>"#;

    #[test]
    fn test_first_footer_cell() {
        assert_eq!(extract_league_average(LEAGUE_PAGE).unwrap(), 0.544);
    }

    #[test]
    fn test_footer_inside_comment() {
        let raw = r#"<html><body><!--<table id="advanced-team"><tfoot><tr><td data-stat="ts_pct">.541</td></tr></tfoot></table>--></body></html>"#;
        assert_eq!(extract_league_average(raw).unwrap(), 0.541);
    }

    #[test]
    fn test_served_footer_wins_over_commented_one() {
        let raw = r#"<html><body>
            <!--<table><tfoot><tr><td data-stat="ts_pct">.501</td></tr></tfoot></table>-->
            <table><tfoot><tr><td data-stat="ts_pct">.552</td></tr></tfoot></table>
        </body></html>"#;
        assert_eq!(extract_league_average(raw).unwrap(), 0.552);
    }

    #[test]
    fn test_missing_footer_is_parse_error() {
        match extract_league_average("<html><body><p>nothing</p></body></html>") {
            Err(RtsError::Parse { message }) => assert!(message.contains("not found")),
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_footer_is_parse_error() {
        let raw = r#"<table><tfoot><tr><td data-stat="ts_pct"></td></tr></tfoot></table>"#;
        assert!(matches!(
            extract_league_average(raw),
            Err(RtsError::Parse { .. })
        ));
    }

    #[test]
    fn test_parse_stat() {
        assert_eq!(parse_stat(".544"), Some(0.544));
        assert_eq!(parse_stat(" 0.61 "), Some(0.61));
        assert_eq!(parse_stat(""), None);
        assert_eq!(parse_stat("NaN"), None);
        assert_eq!(parse_stat("inf"), None);
        assert_eq!(parse_stat("abc"), None);
    }
}
