use crate::models::{WeekOption, WeeklyResponse};
use crate::render::{format_miles, EMPTY_MILEAGE};

pub fn render_index(weekly: &WeeklyResponse, weeks: &[WeekOption], selected: &str) -> String {
    let athlete = weekly
        .athlete
        .as_ref()
        .map(|athlete| athlete.name.as_str())
        .unwrap_or("No athlete");

    let rows: String = weekly
        .table
        .rows
        .iter()
        .map(|row| {
            let class = if row.mileage == EMPTY_MILEAGE {
                "mileage-value empty"
            } else {
                "mileage-value"
            };
            format!(
                "<tr><td>{}</td><td>{}</td><td class=\"{class}\">{}</td></tr>\n",
                escape(&row.day),
                escape(&row.date_label),
                escape(&row.mileage),
            )
        })
        .collect();

    INDEX_HTML
        .replace("{{ATHLETE}}", &escape(athlete))
        .replace("{{WEEK_OPTIONS}}", &week_options(weeks, selected))
        .replace("{{STATUS_CLASS}}", "status hidden")
        .replace("{{STATUS}}", "")
        .replace("{{ROWS}}", &rows)
        .replace("{{TOTAL}}", &weekly.table.total)
        .replace("{{GOAL}}", &weekly.table.goal)
        .replace("{{COMPLETED}}", &weekly.table.completed)
        .replace("{{REMAINING}}", &weekly.table.remaining)
        .replace("{{LONGEST}}", &format_miles(weekly.summary.longest_run))
        .replace("{{LONG_RUN_GOAL}}", &format_miles(weekly.summary.long_run_goal))
}

pub fn render_error(weeks: &[WeekOption], selected: &str, message: &str) -> String {
    let empty = "0.00";
    INDEX_HTML
        .replace("{{ATHLETE}}", "Weekly mileage")
        .replace("{{WEEK_OPTIONS}}", &week_options(weeks, selected))
        .replace("{{STATUS_CLASS}}", "status error")
        .replace("{{STATUS}}", &escape(message))
        .replace("{{ROWS}}", "")
        .replace("{{TOTAL}}", empty)
        .replace("{{GOAL}}", empty)
        .replace("{{COMPLETED}}", empty)
        .replace("{{REMAINING}}", empty)
        .replace("{{LONGEST}}", empty)
        .replace("{{LONG_RUN_GOAL}}", empty)
}

fn week_options(weeks: &[WeekOption], selected: &str) -> String {
    weeks
        .iter()
        .map(|week| {
            let marker = if week.value == selected { " selected" } else { "" };
            format!(
                "<option value=\"{}\"{marker}>{}</option>",
                escape(&week.value),
                escape(&week.label),
            )
        })
        .collect()
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Weekly Mileage</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4ef;
      --bg-2: #b9dcc4;
      --ink: #22302a;
      --accent: #2e8b57;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3f1e7 60%, #f4f8f5 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: flex-end;
      justify-content: space-between;
      gap: 16px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5f5c57;
    }

    select,
    button {
      font: inherit;
      border-radius: 999px;
      padding: 10px 16px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      background: white;
    }

    button {
      background: var(--accent-2);
      color: white;
      border: none;
      cursor: pointer;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      background: white;
      border-radius: 20px;
      overflow: hidden;
    }

    th,
    td {
      padding: 12px 16px;
      text-align: left;
      border-bottom: 1px solid rgba(47, 72, 88, 0.08);
    }

    .mileage-value {
      text-align: right;
      font-weight: 600;
      color: var(--accent);
    }

    .mileage-value.empty {
      color: #a19b93;
    }

    .total-row td {
      font-weight: 600;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
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
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .status {
      font-size: 0.95rem;
      min-height: 1.2em;
    }

    .status.hidden {
      display: none;
    }

    .status.error {
      color: #c63b2b;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>{{ATHLETE}}</h1>
        <p class="subtitle">Weekly mileage against goal.</p>
      </div>
      <form id="week-form" method="get" action="/">
        <select id="weekSelect" name="week" onchange="this.form.submit()">{{WEEK_OPTIONS}}</select>
        <button id="reload-btn" type="button">Reload</button>
      </form>
    </header>

    <div id="status" class="{{STATUS_CLASS}}">{{STATUS}}</div>

    <table>
      <thead>
        <tr><th>Day</th><th>Date</th><th class="mileage-value">Miles</th></tr>
      </thead>
      <tbody id="mileageTableBody">
{{ROWS}}      </tbody>
      <tfoot>
        <tr class="total-row"><td colspan="2">Total</td><td id="totalMileage" class="mileage-value">{{TOTAL}}</td></tr>
      </tfoot>
    </table>

    <section class="panel">
      <div class="stat">
        <span class="label">Goal</span>
        <span id="goalValue" class="value">{{GOAL}}</span>
      </div>
      <div class="stat">
        <span class="label">Completed</span>
        <span id="completedMileage" class="value">{{COMPLETED}}</span>
      </div>
      <div class="stat">
        <span class="label">Remaining</span>
        <span id="remainingMileage" class="value">{{REMAINING}}</span>
      </div>
      <div class="stat">
        <span class="label">Longest run</span>
        <span id="longestRun" class="value">{{LONGEST}} / {{LONG_RUN_GOAL}}</span>
      </div>
    </section>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    document.getElementById('reload-btn').addEventListener('click', async () => {
      statusEl.className = 'status';
      statusEl.textContent = 'Reloading activity data...';
      const res = await fetch('/api/reload', { method: 'POST' });
      if (res.ok) {
        window.location.reload();
        return;
      }
      statusEl.className = 'status error';
      statusEl.textContent = (await res.text()) || 'Reload failed';
    });
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AthleteSummary, TableRow, WeeklySummary, WeeklyTable};

    fn weeks() -> Vec<WeekOption> {
        vec![
            WeekOption {
                value: "current".to_string(),
                label: "Current week".to_string(),
                start: "2024-01-08".to_string(),
            },
            WeekOption {
                value: "2024-01-01".to_string(),
                label: "Week of Jan 1, 2024".to_string(),
                start: "2024-01-01".to_string(),
            },
        ]
    }

    fn weekly() -> WeeklyResponse {
        WeeklyResponse {
            week_start: "2024-01-01".to_string(),
            week_end: "2024-01-07".to_string(),
            athlete: Some(AthleteSummary {
                athlete_id: 1,
                name: "Tori <Lane>".to_string(),
            }),
            summary: WeeklySummary::default(),
            table: WeeklyTable {
                rows: vec![
                    TableRow {
                        day: "Monday".to_string(),
                        date_label: "Jan 1, 2024".to_string(),
                        mileage: "5.00".to_string(),
                    },
                    TableRow {
                        day: "Tuesday".to_string(),
                        date_label: "Jan 2, 2024".to_string(),
                        mileage: EMPTY_MILEAGE.to_string(),
                    },
                ],
                total: "5.00".to_string(),
                goal: "20.00".to_string(),
                completed: "5.00".to_string(),
                remaining: "15.00".to_string(),
            },
        }
    }

    #[test]
    fn index_renders_rows_and_summary() {
        let html = render_index(&weekly(), &weeks(), "2024-01-01");
        assert!(html.contains("<td class=\"mileage-value\">5.00</td>"));
        assert!(html.contains("<td class=\"mileage-value empty\">--</td>"));
        assert!(html.contains("id=\"remainingMileage\" class=\"value\">15.00"));
        assert!(html.contains("<option value=\"2024-01-01\" selected>"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn athlete_name_is_escaped() {
        let html = render_index(&weekly(), &weeks(), "current");
        assert!(html.contains("Tori &lt;Lane&gt;"));
        assert!(!html.contains("Tori <Lane>"));
    }

    #[test]
    fn error_page_shows_message() {
        let html = render_error(&weeks(), "current", "Error loading data: feed down");
        assert!(html.contains("class=\"status error\">Error loading data: feed down"));
        assert!(!html.contains("{{"));
    }
}
