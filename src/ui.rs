use crate::models::Snapshot;
use crate::view::format_points;

pub fn render_index(snapshot: &Snapshot) -> String {
    INDEX_HTML
        .replace("{{TOTAL}}", &format_points(snapshot.total))
        .replace("{{REMAINING}}", &format_points(snapshot.points_remaining))
        .replace("{{TARGET_LABEL}}", &format_points(snapshot.target))
        .replace("{{TARGET}}", &snapshot.target.to_string())
        .replace("{{HOURS}}", &snapshot.hours.to_string())
        .replace("{{PERCENT}}", &format!("{:.1}", snapshot.percent))
        .replace("{{STATUS}}", &snapshot.status)
        .replace("{{TIME_LEFT}}", &snapshot.timer.display)
        .replace("{{TIMER_LABEL}}", &snapshot.timer.label)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Progress Tracker</title>
  <style>
    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --muted: #8b857d;
      --good: #2f8f5b;
      --warn: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Georgia", serif;
      margin: 0;
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
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .mono {
      font-family: ui-monospace, monospace;
    }

    .track {
      height: 12px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.12);
      overflow: hidden;
    }

    #bar {
      height: 100%;
      background: var(--warn);
      transition: width 300ms ease;
    }

    .row {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
      align-items: center;
    }

    button {
      border: none;
      border-radius: 14px;
      padding: 12px 18px;
      font-size: 1rem;
      cursor: pointer;
      background: var(--accent-2);
      color: white;
    }

    button.quiet {
      background: white;
      color: var(--accent-2);
      border: 1px solid rgba(47, 72, 88, 0.2);
    }

    input {
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      padding: 10px 12px;
      font-size: 1rem;
      width: 120px;
    }

    .histItem {
      padding: 8px 0;
      border-bottom: 1px solid rgba(47, 72, 88, 0.08);
    }

    .sub {
      color: var(--muted);
      font-size: 0.9rem;
    }

    @media (max-width: 640px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header class="row">
      <h1>Progress Tracker</h1>
      <span id="statusPill" class="sub">{{STATUS}}</span>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Total</span>
        <span id="total" class="value mono">{{TOTAL}}</span>
        <span id="targetLabel" class="sub">Target: {{TARGET_LABEL}}</span>
      </div>
      <div class="stat">
        <span class="label">Remaining</span>
        <span id="remaining" class="value mono">{{REMAINING}}</span>
        <span id="pct" class="sub">{{PERCENT}}%</span>
      </div>
      <div class="stat">
        <span class="label">Time left</span>
        <span id="timeLeft" class="value mono">{{TIME_LEFT}}</span>
        <span id="endsAt" class="sub">{{TIMER_LABEL}}</span>
      </div>
    </section>

    <div class="track"><div id="bar" style="width: {{PERCENT}}%"></div></div>

    <section class="row">
      <input id="scoreInput" type="number" min="0" max="1000" placeholder="Score" />
      <button id="addBtn" type="button">Add</button>
      <button id="subBtn" type="button" class="quiet">Subtract</button>
      <button id="undoBtn" type="button" class="quiet">Undo</button>
    </section>

    <section class="row">
      <button type="button" class="quiet" data-add="60">+60</button>
      <button type="button" class="quiet" data-add="100">+100</button>
      <button type="button" class="quiet" data-add="140">+140</button>
      <button type="button" class="quiet" data-add="180">+180</button>
    </section>

    <section class="row">
      <button id="startBtn" type="button">Start</button>
      <button id="stopBtn" type="button" class="quiet">Stop</button>
      <button id="resetTimerBtn" type="button" class="quiet">Reset timer</button>
    </section>

    <section class="row">
      <label class="sub">Target <input id="targetInput" type="number" min="1" value="{{TARGET}}" /></label>
      <label class="sub">Hours <input id="hoursInput" type="number" min="1" max="72" value="{{HOURS}}" /></label>
      <button id="resetBtn" type="button" class="quiet">Reset score</button>
      <button id="wipeBtn" type="button" class="quiet">Wipe everything</button>
    </section>

    <section id="history"></section>
  </main>

  <script>
    const $ = (id) => document.getElementById(id);

    const post = async (path, body) => {
      const res = await fetch(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body || {})
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      render(await res.json());
    };

    const renderTimer = (timer) => {
      $('timeLeft').textContent = timer.display;
      $('endsAt').textContent = timer.label;
    };

    const render = (snap) => {
      $('total').textContent = snap.total.toLocaleString('en-GB');
      $('remaining').textContent = snap.points_remaining.toLocaleString('en-GB');
      $('targetLabel').textContent = `Target: ${snap.target.toLocaleString('en-GB')}`;
      $('pct').textContent = `${snap.percent.toFixed(1)}%`;
      $('bar').style.width = `${snap.percent}%`;
      $('statusPill').textContent = snap.status;
      $('statusPill').style.color = snap.target_reached ? 'var(--warn)' : 'var(--good)';
      $('targetInput').value = snap.target;
      $('hoursInput').value = snap.hours;

      const box = $('history');
      box.innerHTML = '';
      if (!snap.recent.length) {
        box.innerHTML = '<div class="histItem"><div class="sub">No entries yet.</div></div>';
      }
      for (const item of snap.recent) {
        const div = document.createElement('div');
        div.className = 'histItem';
        div.innerHTML = `<div class="mono"><b>${item.label}</b> <span class="sub">(${item.time})</span></div>
          <div class="sub">Total after: ${item.after_label}</div>`;
        box.appendChild(div);
      }

      renderTimer(snap.timer);
    };

    const fail = (err) => {
      $('statusPill').textContent = err.message;
    };

    const saveSettings = () =>
      post('/api/settings', { target: $('targetInput').value, hours: $('hoursInput').value });

    const score = (action) => {
      const amount = $('scoreInput').value;
      saveSettings()
        .then(() => post('/api/score', { action, amount }))
        .then(() => { $('scoreInput').value = ''; })
        .catch(fail);
    };

    const confirmed = (message, path) => {
      if (confirm(message)) {
        post(path).catch(fail);
      }
    };

    $('addBtn').addEventListener('click', () => score('add'));
    $('subBtn').addEventListener('click', () => score('sub'));
    $('undoBtn').addEventListener('click', () => post('/api/undo').catch(fail));
    $('resetBtn').addEventListener('click', () =>
      confirmed('Reset total points & history back to zero?', '/api/reset-score'));
    $('wipeBtn').addEventListener('click', () =>
      confirmed('Wipe everything (score, timer, settings) on this device?', '/api/wipe'));
    $('targetInput').addEventListener('change', () => saveSettings().catch(fail));
    $('hoursInput').addEventListener('change', () => saveSettings().catch(fail));
    $('startBtn').addEventListener('click', () => post('/api/timer/start').catch(fail));
    $('stopBtn').addEventListener('click', () => post('/api/timer/stop').catch(fail));
    $('resetTimerBtn').addEventListener('click', () =>
      confirmed('Reset the timer back to full length?', '/api/timer/reset'));

    document.querySelectorAll('[data-add]').forEach((btn) => {
      btn.addEventListener('click', () =>
        post('/api/score', { action: 'add', amount: btn.dataset.add }).catch(fail));
    });

    setInterval(() => {
      fetch('/api/timer')
        .then((res) => res.json())
        .then(renderTimer)
        .catch(() => {});
    }, 250);

    fetch('/api/state').then((res) => res.json()).then(render).catch(fail);
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use crate::view::build_snapshot_at;

    #[test]
    fn placeholders_are_filled() {
        let snapshot = build_snapshot_at(&Record::default(), 0);
        let html = render_index(&snapshot);
        assert!(!html.contains("{{"));
        assert!(html.contains("Target: 100,000"));
        assert!(html.contains("12:00:00"));
        assert!(html.contains("Timer not started"));
    }
}
