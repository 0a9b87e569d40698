use crate::controller::{ChartsSnapshot, Phase, SummarySnapshot, TableSnapshot};
use crate::errors::AppError;
use crate::models::{SortDirection, SummaryKind};
use chrono::{Datelike, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Table,
    Charts,
    Summary,
}

impl View {
    fn path(self) -> &'static str {
        match self {
            Self::Table => "/",
            Self::Charts => "/charts",
            Self::Summary => "/summary",
        }
    }

    fn nav_label(self) -> &'static str {
        match self {
            Self::Table => "Feedback",
            Self::Charts => "Analytics",
            Self::Summary => "Summary",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Table => "Feedback Explorer",
            Self::Charts => "Visual Analytics",
            Self::Summary => "AI Summary",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Table => "Review and analyze all customer feedback in one place",
            Self::Charts => "Understand your feedback data through interactive charts",
            Self::Summary => "Get intelligent insights from your feedback data",
        }
    }
}

pub fn render_table(snapshot: &TableSnapshot) -> String {
    let mut body = String::new();
    body.push_str(&format!(
        r#"<section class="card toolbar">
      <form method="post" action="/table/search" class="inline">
        <input type="search" name="term" placeholder="Search feedback" value="{}" />
        <button type="submit" class="btn">Search</button>
      </form>
      <form method="post" action="/table/refresh" class="inline">
        <button type="submit" class="btn ghost">Refresh</button>
      </form>
    </section>
"#,
        escape_html(&snapshot.search)
    ));

    body.push_str(&status_block(&snapshot.phase, "Loading feedback..."));

    if snapshot.phase.is_ready() {
        body.push_str(&format!(
            r#"<p class="meta">Showing {} of {} responses{}</p>
"#,
            snapshot.rows.len(),
            snapshot.total,
            updated_suffix(snapshot.updated_at.as_deref())
        ));

        if snapshot.columns.is_empty() {
            body.push_str(r#"<p class="empty">No feedback yet.</p>"#);
        } else {
            body.push_str(r#"<section class="card scroll"><table><thead><tr>"#);
            for column in &snapshot.columns {
                let marker = match (&snapshot.sort.field, snapshot.sort.direction) {
                    (Some(field), SortDirection::Ascending) if field == column => " &#9650;",
                    (Some(field), SortDirection::Descending) if field == column => " &#9660;",
                    _ => "",
                };
                body.push_str(&format!(
                    r#"<th><form method="post" action="/table/sort"><input type="hidden" name="field" value="{name}" /><button type="submit" class="sort">{name}{marker}</button></form></th>"#,
                    name = escape_html(column),
                ));
            }
            body.push_str("</tr></thead><tbody>");
            for row in &snapshot.rows {
                body.push_str("<tr>");
                for column in &snapshot.columns {
                    body.push_str(&format!("<td>{}</td>", escape_html(&row.display_value(column))));
                }
                body.push_str("</tr>");
            }
            body.push_str("</tbody></table></section>\n");
        }
    }

    render_page(View::Table, &body, "", snapshot.phase.is_loading())
}

pub fn render_charts(snapshot: &ChartsSnapshot) -> Result<String, AppError> {
    let criteria = &snapshot.criteria;
    let options: String = snapshot
        .categories
        .iter()
        .map(|name| format!(r#"<option value="{0}"></option>"#, escape_html(name)))
        .collect();

    let mut body = format!(
        r#"<section class="card">
      <h3>Filters</h3>
      <form method="post" action="/charts/filter" class="filters">
        <input type="date" name="start" value="{start}" />
        <input type="date" name="end" value="{end}" />
        <input type="text" name="category" placeholder="Category" list="categories" value="{category}" />
        <datalist id="categories">{options}</datalist>
        <button type="submit" class="btn">Apply Filters</button>
      </form>
      <form method="post" action="/charts/reset" class="inline">
        <button type="submit" class="btn ghost">Reset</button>
      </form>
    </section>
"#,
        start = escape_html(criteria.start_date.as_deref().unwrap_or_default()),
        end = escape_html(criteria.end_date.as_deref().unwrap_or_default()),
        category = escape_html(criteria.category.as_deref().unwrap_or_default()),
    );

    body.push_str(&status_block(&snapshot.phase, "Loading dashboard data..."));

    let mut script = String::new();
    if snapshot.phase.is_ready() {
        let headline = &snapshot.headline;
        body.push_str(&format!(
            r#"<section class="panel">
      <div class="stat"><span class="label">Responses</span><span class="value">{total}</span></div>
      <div class="stat"><span class="label">Dominant sentiment</span><span class="value">{dominant}</span></div>
      <div class="stat"><span class="label">Categories</span><span class="value">{categories}</span></div>
    </section>
    <p class="meta">{updated}</p>
"#,
            total = headline.total_responses,
            dominant = escape_html(headline.dominant_sentiment.as_deref().unwrap_or("-")),
            categories = snapshot.categories.len(),
            updated = updated_suffix(snapshot.updated_at.as_deref()).trim_start_matches(" · "),
        ));
        body.push_str(CHART_CARDS);

        let data = serde_json::to_string(&snapshot.series)?.replace("</", "<\\/");
        script = CHART_SCRIPT.replace("{{CHART_DATA}}", &data);
    }

    Ok(render_page(
        View::Charts,
        &body,
        &script,
        snapshot.phase.is_loading(),
    ))
}

pub fn render_summary(snapshot: &SummarySnapshot) -> String {
    let loading = snapshot.phase.is_loading();
    let options: String = SummaryKind::ALL
        .iter()
        .map(|kind| {
            let selected = if *kind == snapshot.kind { " selected" } else { "" };
            format!(r#"<option value="{kind}"{selected}>{kind}</option>"#)
        })
        .collect();

    let mut body = format!(
        r#"<section class="card">
      <h3>Feedback Summary</h3>
      <form method="post" action="/summary/generate" class="inline">
        <select name="kind">{options}</select>
        <button type="submit" class="btn"{disabled}>{label}</button>
      </form>
"#,
        disabled = if loading { " disabled" } else { "" },
        label = if loading { "Summarizing…" } else { "Summarize Feedback" },
    );

    if let Phase::Failed { message } = &snapshot.phase {
        body.push_str(&format!(
            r#"<p class="status error">{}</p>
"#,
            escape_html(message)
        ));
    }

    if let Some(report) = &snapshot.report {
        body.push_str(&format!(
            r#"<div class="report">{}</div>
      <p class="meta">{} summary{}</p>
"#,
            escape_html(&report.text),
            report.kind,
            updated_suffix(snapshot.updated_at.as_deref())
        ));
    }
    body.push_str("</section>\n");

    render_page(View::Summary, &body, "", loading)
}

fn render_page(view: View, body: &str, script: &str, auto_refresh: bool) -> String {
    let nav: String = [View::Table, View::Charts, View::Summary]
        .into_iter()
        .map(|item| {
            let class = if item == view { "tab active" } else { "tab" };
            format!(
                r#"<a class="{class}" href="{}">{}</a>"#,
                item.path(),
                item.nav_label()
            )
        })
        .collect();

    let refresh = if auto_refresh {
        r#"<meta http-equiv="refresh" content="2" />"#
    } else {
        ""
    };

    let layout = LAYOUT_HTML
        .replace("{{REFRESH}}", refresh)
        .replace("{{NAV}}", &nav)
        .replace("{{TITLE}}", view.title())
        .replace("{{DESCRIPTION}}", view.description())
        .replace("{{YEAR}}", &Local::now().year().to_string());

    // body and script carry upstream text, so they are spliced in one pass
    let (head, rest) = layout.split_once("{{BODY}}").unwrap_or((layout.as_str(), ""));
    let (middle, tail) = rest.split_once("{{SCRIPT}}").unwrap_or((rest, ""));
    [head, body, middle, script, tail].concat()
}

fn status_block(phase: &Phase, loading_text: &str) -> String {
    match phase {
        Phase::Idle | Phase::Loading => format!(r#"<p class="status info">{loading_text}</p>"#),
        Phase::Failed { message } => {
            format!(r#"<p class="status error">{}</p>"#, escape_html(message))
        }
        Phase::Ready => String::new(),
    }
}

fn updated_suffix(updated_at: Option<&str>) -> String {
    updated_at
        .map(|at| format!(" · updated {at}"))
        .unwrap_or_default()
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

const LAYOUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  {{REFRESH}}
  <title>{{TITLE}} · AI Feedback Analyzer</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef2ff;
      --bg-2: #e9d5ff;
      --ink: #1f2937;
      --accent: #4f46e5;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f5f3ff 60%, #eff6ff 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    header.top {
      background: white;
      box-shadow: var(--shadow);
      padding: 18px 32px;
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(1.6rem, 3vw, 2.2rem);
      margin: 0;
      color: var(--accent);
    }

    nav {
      display: flex;
      gap: 8px;
    }

    .tab {
      padding: 8px 16px;
      border-radius: 999px;
      background: #f3f4f6;
      color: #374151;
      text-decoration: none;
    }

    .tab.active {
      background: var(--accent);
      color: white;
    }

    main {
      width: min(1100px, 100%);
      margin: 0 auto;
      padding: 32px 18px 48px;
      display: grid;
      gap: 20px;
    }

    main > header h2 {
      margin: 0;
    }

    .subtitle,
    .meta {
      margin: 0;
      color: #6b7280;
    }

    .card {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 20px;
    }

    .card h3 {
      margin-top: 0;
    }

    .toolbar,
    .filters,
    .inline {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
      align-items: center;
    }

    .toolbar {
      justify-content: space-between;
    }

    .filters {
      margin-bottom: 10px;
    }

    input,
    select {
      border: 1px solid #d1d5db;
      border-radius: 10px;
      padding: 10px 12px;
      font: inherit;
    }

    .btn {
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    .btn.ghost {
      background: #e5e7eb;
      color: var(--ink);
    }

    .btn[disabled] {
      opacity: 0.6;
      cursor: progress;
    }

    .scroll {
      overflow-x: auto;
    }

    table {
      border-collapse: collapse;
      min-width: 100%;
    }

    th,
    td {
      border: 1px solid #e5e7eb;
      padding: 8px 12px;
      text-align: left;
      vertical-align: top;
    }

    button.sort {
      border: none;
      background: none;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      padding: 0;
    }

    .status {
      margin: 0;
      padding: 12px 16px;
      border-radius: 12px;
    }

    .status.info {
      background: #e0e7ff;
    }

    .status.error {
      background: #fee2e2;
      color: #b91c1c;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .charts {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(420px, 1fr));
      gap: 20px;
    }

    svg {
      width: 100%;
      height: 260px;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #6b7280;
      font-size: 11px;
    }

    .report {
      margin-top: 12px;
      padding: 16px;
      border-radius: 12px;
      background: #f3f4f6;
      white-space: pre-line;
    }

    footer {
      text-align: center;
      color: #9ca3af;
      font-size: 0.85rem;
      padding-bottom: 24px;
    }
  </style>
</head>
<body>
  <header class="top">
    <h1>AI Feedback Analyzer</h1>
    <nav>{{NAV}}</nav>
  </header>
  <main>
    <header>
      <h2>{{TITLE}}</h2>
      <p class="subtitle">{{DESCRIPTION}}</p>
    </header>
    {{BODY}}
  </main>
  <footer>&copy; {{YEAR}} AI Feedback Summarizer</footer>
  {{SCRIPT}}
</body>
</html>
"#;

const CHART_CARDS: &str = r#"<section class="charts">
      <div class="card"><h3>Sentiment Distribution</h3><svg id="chart-sentiment"></svg></div>
      <div class="card"><h3>Average Rating per Product</h3><svg id="chart-ratings"></svg></div>
      <div class="card"><h3>Sentiment Trend Over Time</h3><svg id="chart-trend"></svg></div>
      <div class="card"><h3>Most Common Feedback Keywords</h3><svg id="chart-keywords"></svg></div>
      <div class="card"><h3>Average Sentiment by Category</h3><svg id="chart-radar"></svg></div>
    </section>
"#;

const CHART_SCRIPT: &str = r##"<script>
    const series = {{CHART_DATA}};
    const W = 600;
    const H = 260;
    const PAD = 40;
    const SLICE_COLORS = ['#22c55e', '#eab308', '#ef4444'];

    const esc = (text) => String(text).replace(/[&<>"]/g, (c) => ({ '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;' }[c]));
    const num = (value) => (typeof value === 'number' ? value : 0);

    const empty = (el) => {
      el.innerHTML = `<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data</text>`;
    };

    const bars = (id, points, color) => {
      const el = document.getElementById(id);
      el.setAttribute('viewBox', `0 0 ${W} ${H}`);
      if (!points.length) return empty(el);
      const max = Math.max(...points.map((p) => p.value), 1);
      const step = (W - PAD * 2) / points.length;
      const scale = (H - PAD * 2) / max;
      el.innerHTML = points.map((p, i) => {
        const h = Math.max(p.value, 0) * scale;
        const x = PAD + i * step + step * 0.15;
        return `<rect x="${x}" y="${H - PAD - h}" width="${step * 0.7}" height="${h}" fill="${color}" rx="4" />` +
          `<text class="chart-label" x="${x + step * 0.35}" y="${H - PAD + 16}" text-anchor="middle">${esc(p.label)}</text>` +
          `<text class="chart-label" x="${x + step * 0.35}" y="${H - PAD - h - 6}" text-anchor="middle">${+p.value.toFixed(2)}</text>`;
      }).join('');
    };

    const line = (id, points) => {
      const el = document.getElementById(id);
      el.setAttribute('viewBox', `0 0 ${W} ${H}`);
      if (!points.length) return empty(el);
      const xStep = points.length > 1 ? (W - PAD * 2) / (points.length - 1) : 0;
      const x = (i) => PAD + i * xStep;
      const y = (v) => H - PAD - ((v + 1) / 2) * (H - PAD * 2);
      const grid = [-1, -0.5, 0, 0.5, 1].map((v) =>
        `<line class="chart-grid" x1="${PAD}" y1="${y(v)}" x2="${W - PAD}" y2="${y(v)}" />` +
        `<text class="chart-label" x="${PAD - 8}" y="${y(v) + 4}" text-anchor="end">${v}</text>`).join('');
      const path = points.map((p, i) => `${i ? 'L' : 'M'} ${x(i)} ${y(p.value)}`).join(' ');
      const labels = points.map((p, i) =>
        `<text class="chart-label" x="${x(i)}" y="${H - PAD + 16}" text-anchor="middle">${esc(p.label)}</text>`).join('');
      el.innerHTML = `${grid}<path d="${path}" fill="none" stroke="#6366f1" stroke-width="3" />${labels}`;
    };

    const pie = (id, slices) => {
      const el = document.getElementById(id);
      el.setAttribute('viewBox', `0 0 ${W} ${H}`);
      const total = slices.reduce((acc, s) => acc + s.count, 0);
      if (!total) return empty(el);
      const cx = W / 2;
      const cy = H / 2;
      const r = 100;
      let angle = -Math.PI / 2;
      el.innerHTML = slices.map((s, i) => {
        const sweep = (s.count / total) * Math.PI * 2;
        const end = angle + sweep;
        const large = sweep > Math.PI ? 1 : 0;
        const d = sweep >= Math.PI * 2
          ? `M ${cx - r} ${cy} a ${r} ${r} 0 1 0 ${r * 2} 0 a ${r} ${r} 0 1 0 ${-r * 2} 0`
          : `M ${cx} ${cy} L ${cx + r * Math.cos(angle)} ${cy + r * Math.sin(angle)} A ${r} ${r} 0 ${large} 1 ${cx + r * Math.cos(end)} ${cy + r * Math.sin(end)} Z`;
        const mid = angle + sweep / 2;
        angle = end;
        return `<path d="${d}" fill="${SLICE_COLORS[i % SLICE_COLORS.length]}" />` +
          `<text class="chart-label" x="${cx + (r + 18) * Math.cos(mid)}" y="${cy + (r + 18) * Math.sin(mid)}" text-anchor="middle">${esc(s.label)} (${s.count})</text>`;
      }).join('');
    };

    const radar = (id, points) => {
      const el = document.getElementById(id);
      el.setAttribute('viewBox', `0 0 ${W} ${H}`);
      if (!points.length) return empty(el);
      const cx = W / 2;
      const cy = H / 2;
      const r = 90;
      const at = (i, v) => {
        const a = -Math.PI / 2 + (i / points.length) * Math.PI * 2;
        const scaled = ((v + 1) / 2) * r;
        return [cx + scaled * Math.cos(a), cy + scaled * Math.sin(a)];
      };
      const rings = [0.25, 0.5, 0.75, 1].map((f) =>
        `<polygon class="chart-grid" fill="none" points="${points.map((_, i) => at(i, f * 2 - 1).join(',')).join(' ')}" />`).join('');
      const shape = points.map((p, i) => at(i, p.value).join(',')).join(' ');
      const labels = points.map((p, i) => {
        const [lx, ly] = at(i, 1.25);
        return `<text class="chart-label" x="${lx}" y="${ly}" text-anchor="middle">${esc(p.label)}</text>`;
      }).join('');
      el.innerHTML = `${rings}<polygon points="${shape}" fill="#8884d8" fill-opacity="0.6" stroke="#8884d8" />${labels}`;
    };

    pie('chart-sentiment', series.sentiment);
    bars('chart-ratings', series.ratings.map((p) => ({ label: p.product, value: num(p.rating) })), '#38bdf8');
    line('chart-trend', series.trend.map((p) => ({ label: p.date, value: num(p.sentiment) })));
    bars('chart-keywords', series.keywords.map((p) => ({ label: p.word, value: p.count })), '#fb923c');
    radar('chart-radar', series.radar.map((p) => ({ label: p.name, value: num(p.sentiment) })));
  </script>"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{ChartSeries, Headline};
    use crate::models::{FeedbackRecord, FilterCriteria, KeywordCount, SortSpec, SummaryReport};
    use serde_json::json;

    fn table(phase: Phase) -> TableSnapshot {
        TableSnapshot {
            phase,
            columns: vec!["product".into(), "comment".into()],
            rows: vec![FeedbackRecord::from([
                ("product", json!("Widget")),
                ("comment", json!("<b>loud</b>")),
            ])],
            total: 4,
            sort: SortSpec::descending("product"),
            search: "wid".into(),
            updated_at: Some("2026-01-05 09:30:00".into()),
        }
    }

    #[test]
    fn table_escapes_cells_and_marks_sort() {
        let html = render_table(&table(Phase::Ready));
        assert!(html.contains("&lt;b&gt;loud&lt;/b&gt;"));
        assert!(html.contains("product &#9660;"));
        assert!(html.contains("Showing 1 of 4 responses"));
        assert!(html.contains(r#"value="wid""#));
        assert!(html.contains("Feedback Explorer"));
    }

    #[test]
    fn table_failure_shows_message_only() {
        let html = render_table(&table(Phase::Failed {
            message: "Failed to load feedback data".into(),
        }));
        assert!(html.contains("Failed to load feedback data"));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn loading_pages_refresh_themselves() {
        let html = render_table(&table(Phase::Loading));
        assert!(html.contains(r#"http-equiv="refresh""#));
        assert!(html.contains("Loading feedback..."));
    }

    #[test]
    fn charts_embed_series_and_keep_criteria() {
        let snapshot = ChartsSnapshot {
            phase: Phase::Ready,
            criteria: FilterCriteria {
                category: Some("Billing".into()),
                ..FilterCriteria::default()
            },
            categories: vec!["Billing".into()],
            series: ChartSeries::default(),
            headline: Headline {
                total_responses: 12,
                dominant_sentiment: Some("positive".into()),
            },
            updated_at: None,
        };
        let html = render_charts(&snapshot).unwrap();
        assert!(html.contains(r#"name="category" placeholder="Category" list="categories" value="Billing""#));
        assert!(html.contains(r#"const series = {"ratings":[]"#));
        assert!(html.contains("Apply Filters"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn ready_charts_carry_the_drawing_script() {
        let snapshot = ChartsSnapshot {
            phase: Phase::Ready,
            criteria: FilterCriteria::default(),
            categories: vec!["Support".into()],
            series: ChartSeries {
                keywords: vec![KeywordCount {
                    word: "</script>".into(),
                    count: 3,
                }],
                ..ChartSeries::default()
            },
            headline: Headline::default(),
            updated_at: None,
        };
        let html = render_charts(&snapshot).unwrap();
        assert!(html.contains(r##"stroke="#6366f1""##));
        assert!(html.contains(r##"fill="#8884d8""##));
        assert!(html.contains(r#"radar('chart-radar'"#));
        assert!(html.contains(r#""word":"<\/script>""#));
        assert_eq!(html.matches("</script>").count(), 1);
    }

    #[test]
    fn upstream_text_never_fills_layout_slots() {
        let snapshot = ChartsSnapshot {
            phase: Phase::Ready,
            criteria: FilterCriteria {
                category: Some("{{SCRIPT}}".into()),
                ..FilterCriteria::default()
            },
            categories: Vec::new(),
            series: ChartSeries {
                keywords: vec![KeywordCount {
                    word: "{{BODY}}".into(),
                    count: 1,
                }],
                ..ChartSeries::default()
            },
            headline: Headline::default(),
            updated_at: None,
        };
        let html = render_charts(&snapshot).unwrap();
        assert!(html.contains(r#""word":"{{BODY}}""#));
        assert!(html.contains(r#"value="{{SCRIPT}}""#));
        assert_eq!(html.matches("Apply Filters").count(), 1);
        assert_eq!(html.matches("<script>").count(), 1);
    }

    #[test]
    fn summary_button_reflects_loading() {
        let loading = SummarySnapshot {
            phase: Phase::Loading,
            kind: SummaryKind::Actionable,
            report: None,
            updated_at: None,
        };
        let html = render_summary(&loading);
        assert!(html.contains("Summarizing…"));
        assert!(html.contains(r#"<option value="actionable" selected>"#));

        let ready = SummarySnapshot {
            phase: Phase::Ready,
            kind: SummaryKind::General,
            report: Some(SummaryReport {
                text: "- Fast delivery".into(),
                kind: SummaryKind::General,
            }),
            updated_at: None,
        };
        let html = render_summary(&ready);
        assert!(html.contains("Summarize Feedback"));
        assert!(html.contains("- Fast delivery"));
    }
}
