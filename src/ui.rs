pub fn render_index(date: &str, streak: u32, total_entries: usize) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{STREAK}}", &streak.to_string())
        .replace("{{TOTAL}}", &total_entries.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Gratitude Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Nunito:wght@400;600;700&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef7ee;
      --bg-2: #cdeccd;
      --ink: #22312a;
      --leaf: #2e8b57;
      --leaf-dark: #1f6140;
      --sky: #4682b4;
      --gold: #d4a017;
      --silver: #8d99a6;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 20px 50px rgba(31, 97, 64, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 55%),
        linear-gradient(150deg, var(--bg-1), #f5fbf0 55%, #ecf6ef 100%);
      color: var(--ink);
      font-family: "Nunito", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(880px, 100%);
      background: var(--card);
      backdrop-filter: blur(10px);
      border-radius: 26px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 30px;
      animation: bloom 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
      text-align: center;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.9rem, 4vw, 2.6rem);
      color: var(--leaf);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5c6b60;
      font-size: 1rem;
    }

    h2 {
      margin: 0;
      font-size: 1.35rem;
      color: var(--sky);
      border-bottom: 2px solid var(--bg-2);
      padding-bottom: 8px;
    }

    .entry-form {
      display: grid;
      gap: 16px;
    }

    .form-row {
      display: grid;
      grid-template-columns: 2fr 1fr;
      gap: 16px;
    }

    textarea {
      width: 100%;
      min-height: 110px;
      resize: vertical;
      border: 1px solid rgba(46, 139, 87, 0.25);
      border-radius: 14px;
      padding: 14px;
      font: inherit;
      color: var(--ink);
      background: white;
    }

    textarea:focus {
      outline: 2px solid var(--leaf);
    }

    .mood-box {
      background: white;
      border: 1px solid rgba(46, 139, 87, 0.15);
      border-radius: 14px;
      padding: 14px;
      display: grid;
      gap: 8px;
      align-content: start;
      text-align: center;
    }

    .mood-box label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #7b877e;
    }

    .mood-emoji {
      font-size: 2.1rem;
      line-height: 1;
    }

    input[type="range"] {
      width: 100%;
      accent-color: var(--leaf);
    }

    .tag-grid {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .tag-grid label {
      background: white;
      border: 1px solid rgba(46, 139, 87, 0.2);
      border-radius: 999px;
      padding: 7px 14px;
      font-size: 0.9rem;
      cursor: pointer;
      display: inline-flex;
      align-items: center;
      gap: 6px;
    }

    .tag-grid label:has(input:checked) {
      background: var(--leaf);
      border-color: var(--leaf);
      color: white;
    }

    .tag-grid input {
      accent-color: var(--leaf-dark);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 15px 20px;
      font: inherit;
      font-weight: 700;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-save {
      background: var(--leaf);
      color: white;
      box-shadow: 0 10px 22px rgba(46, 139, 87, 0.35);
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 16px;
      padding: 16px;
      border: 1px solid rgba(46, 139, 87, 0.1);
      display: grid;
      gap: 6px;
      text-align: center;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7b877e;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 700;
      color: var(--leaf-dark);
    }

    .stat .value.streak {
      color: var(--gold);
    }

    .chart-area {
      display: grid;
      gap: 16px;
    }

    .chart-header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 14px;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(46, 139, 87, 0.1);
      border-radius: 999px;
    }

    .tab {
      background: transparent;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      color: #5c6b60;
      box-shadow: none;
    }

    .tab.active {
      background: white;
      color: var(--leaf-dark);
      box-shadow: 0 8px 16px rgba(46, 139, 87, 0.15);
    }

    .chart-card {
      background: white;
      border-radius: 18px;
      padding: 16px;
      border: 1px solid rgba(46, 139, 87, 0.1);
    }

    #chart {
      width: 100%;
      height: 260px;
      display: block;
    }

    #chart text {
      font-family: "Nunito", "Trebuchet MS", sans-serif;
    }

    .chart-line {
      fill: none;
      stroke: var(--leaf);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--leaf);
      stroke-width: 2;
    }

    .chart-bar {
      fill: var(--leaf);
      opacity: 0.85;
    }

    .chart-grid {
      stroke: rgba(46, 139, 87, 0.15);
    }

    .chart-label {
      fill: #7b877e;
      font-size: 11px;
    }

    .word-list {
      display: grid;
      gap: 10px;
    }

    .word-row {
      display: grid;
      grid-template-columns: 110px 1fr 40px;
      align-items: center;
      gap: 10px;
      font-size: 0.95rem;
    }

    .word-bar {
      background: rgba(46, 139, 87, 0.12);
      border-radius: 999px;
      height: 14px;
      overflow: hidden;
    }

    .word-bar span {
      display: block;
      height: 100%;
      background: var(--leaf);
      border-radius: 999px;
    }

    .journal-controls {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 16px;
    }

    select {
      width: 100%;
      border: 1px solid rgba(46, 139, 87, 0.25);
      border-radius: 12px;
      padding: 10px 12px;
      font: inherit;
      background: white;
      color: var(--ink);
    }

    .entry-list {
      display: grid;
      gap: 14px;
    }

    .entry-card {
      background: linear-gradient(135deg, #eaf6ea, #f4fcf4);
      border-left: 5px solid var(--leaf);
      border-radius: 14px;
      padding: 18px;
      display: grid;
      gap: 8px;
    }

    .entry-card .top {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 10px;
    }

    .entry-card .date {
      font-weight: 700;
      color: var(--leaf-dark);
    }

    .entry-card .mood {
      font-size: 1.2rem;
    }

    .entry-card .text {
      margin: 0;
      font-size: 1.05rem;
      line-height: 1.5;
    }

    .entry-card .tags {
      color: #6d7a70;
      font-size: 0.9rem;
    }

    .badge-list {
      display: grid;
      gap: 10px;
    }

    .badge-card {
      border-radius: 12px;
      padding: 14px 16px;
      display: grid;
      gap: 2px;
      border-left: 4px solid var(--silver);
      background: rgba(141, 153, 166, 0.12);
    }

    .badge-card.gold {
      border-left-color: var(--gold);
      background: rgba(212, 160, 23, 0.12);
    }

    .badge-card .name {
      font-weight: 700;
    }

    .badge-card .desc {
      font-size: 0.9rem;
      color: #6d7a70;
    }

    .progress-block {
      display: grid;
      gap: 6px;
    }

    .progress-track {
      background: rgba(46, 139, 87, 0.12);
      border-radius: 999px;
      height: 12px;
      overflow: hidden;
    }

    .progress-track span {
      display: block;
      height: 100%;
      background: var(--leaf);
      border-radius: 999px;
      transition: width 300ms ease;
    }

    .status {
      font-size: 0.95rem;
      color: #5c6b60;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #b5432f;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .empty-note {
      color: #6d7a70;
      font-size: 0.95rem;
    }

    footer {
      text-align: center;
      color: #8a948c;
      font-size: 0.9rem;
      border-top: 1px solid var(--bg-2);
      padding-top: 16px;
    }

    @keyframes bloom {
      from {
        opacity: 0;
        transform: translateY(16px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 640px) {
      .app {
        padding: 26px 20px;
      }
      .form-row,
      .journal-controls {
        grid-template-columns: 1fr;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Daily Gratitude Tracker</h1>
      <p class="subtitle">Cultivate gratitude, track your happiness, and watch your mood bloom. Today is {{DATE}}.</p>
    </header>

    <section class="entry-form">
      <h2>Today's Entry</h2>
      <div class="form-row">
        <textarea id="gratitude-text" placeholder="I'm grateful for... the sunshine, my health, a good conversation, learning something new..."></textarea>
        <div class="mood-box">
          <label for="mood">Mood today</label>
          <span class="mood-emoji" id="mood-emoji">🥰</span>
          <input type="range" id="mood" min="1" max="10" value="7" />
          <span id="mood-value">7 / 10</span>
        </div>
      </div>
      <div class="tag-grid" id="tags">
        <label><input type="checkbox" value="Family" />Family</label>
        <label><input type="checkbox" value="Friends" />Friends</label>
        <label><input type="checkbox" value="Health" />Health</label>
        <label><input type="checkbox" value="Nature" />Nature</label>
        <label><input type="checkbox" value="Work" />Work</label>
        <label><input type="checkbox" value="Learning" />Learning</label>
        <label><input type="checkbox" value="Hobbies" />Hobbies</label>
        <label><input type="checkbox" value="Food" />Food</label>
        <label><input type="checkbox" value="Random Acts" />Random Acts</label>
        <label><input type="checkbox" value="Personal Growth" />Personal Growth</label>
      </div>
      <button class="btn-save" id="save-btn" type="button">Save Today's Gratitude</button>
      <div class="status" id="status"></div>
    </section>

    <section class="panel">
      <div class="stat">
        <span class="label">Total entries</span>
        <span class="value" id="stat-total">{{TOTAL}}</span>
      </div>
      <div class="stat">
        <span class="label">Avg mood</span>
        <span class="value" id="stat-mood">--</span>
      </div>
      <div class="stat">
        <span class="label">Current streak</span>
        <span class="value streak" id="stat-streak">{{STREAK}}</span>
      </div>
      <div class="stat">
        <span class="label">Avg words</span>
        <span class="value" id="stat-words">--</span>
      </div>
    </section>

    <section class="chart-area">
      <div class="chart-header">
        <h2 id="chart-title">Mood trend</h2>
        <div class="tabs" role="tablist">
          <button class="tab active" type="button" data-tab="trend" role="tab" aria-selected="true">Mood trend</button>
          <button class="tab" type="button" data-tab="weekday" role="tab" aria-selected="false">By weekday</button>
          <button class="tab" type="button" data-tab="words" role="tab" aria-selected="false">Top words</button>
        </div>
      </div>
      <div class="chart-card">
        <svg id="chart" viewBox="0 0 600 260" aria-label="Analytics chart" role="img"></svg>
        <div class="word-list" id="word-list" hidden></div>
      </div>
    </section>

    <section>
      <h2>Gratitude Journal</h2>
      <div class="journal-controls">
        <select id="sort-order">
          <option value="newest">Newest First</option>
          <option value="oldest">Oldest First</option>
        </select>
        <select id="mood-filter">
          <option value="all">All Moods</option>
          <option value="high">High (8-10)</option>
          <option value="medium">Medium (4-7)</option>
          <option value="low">Low (1-3)</option>
        </select>
      </div>
      <div class="entry-list" id="entry-list"></div>
      <p class="empty-note" id="journal-empty">Your journal is waiting for your first entry!</p>
    </section>

    <section>
      <h2>Achievements</h2>
      <div class="badge-list" id="badge-list"></div>
      <p class="empty-note" id="badges-empty">Keep going! You're on your way to unlocking achievements.</p>
      <div class="progress-block">
        <span id="streak-progress-label">7-Day Streak: 0/7 days</span>
        <div class="progress-track"><span id="streak-progress" style="width: 0%"></span></div>
        <span id="entries-progress-label">10 Entries Milestone: 0/10 entries</span>
        <div class="progress-track"><span id="entries-progress" style="width: 0%"></span></div>
      </div>
    </section>

    <footer>Made with care to spread positivity. Your entries live only in this session.</footer>
  </main>

  <script>
    const moodEmojis = ['😢', '😔', '😐', '🙂', '😊', '😄', '🥰', '🤩', '🌈', '✨'];

    const textEl = document.getElementById('gratitude-text');
    const moodEl = document.getElementById('mood');
    const moodEmojiEl = document.getElementById('mood-emoji');
    const moodValueEl = document.getElementById('mood-value');
    const statusEl = document.getElementById('status');
    const statTotalEl = document.getElementById('stat-total');
    const statMoodEl = document.getElementById('stat-mood');
    const statStreakEl = document.getElementById('stat-streak');
    const statWordsEl = document.getElementById('stat-words');
    const chartEl = document.getElementById('chart');
    const chartTitleEl = document.getElementById('chart-title');
    const wordListEl = document.getElementById('word-list');
    const sortOrderEl = document.getElementById('sort-order');
    const moodFilterEl = document.getElementById('mood-filter');
    const entryListEl = document.getElementById('entry-list');
    const journalEmptyEl = document.getElementById('journal-empty');
    const badgeListEl = document.getElementById('badge-list');
    const badgesEmptyEl = document.getElementById('badges-empty');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    let statsData = null;
    let activeTab = 'trend';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const updateMoodWidget = () => {
      const mood = Number(moodEl.value);
      moodEmojiEl.textContent = moodEmojis[mood - 1];
      moodValueEl.textContent = `${mood} / 10`;
    };

    const formatAverage = (value) => {
      if (typeof value !== 'number') {
        return '--';
      }
      return (Math.round(value * 10) / 10).toFixed(1);
    };

    const renderLineChart = (points, minValue, maxValue) => {
      wordListEl.hidden = true;
      chartEl.style.display = 'block';
      if (!points.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">Start your gratitude journey by making your first entry!</text>';
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 44;
      const paddingY = 34;
      const top = 24;

      const range = maxValue - minValue;
      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value - minValue) * scaleY;

      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.value).toFixed(2)}`)
        .join(' ');

      const ticks = 3;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = minValue + (range * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${Math.round(value)}</text>`;
      }

      const labelEvery = points.length > 8 ? Math.ceil(points.length / 8) : 1;
      const xLabels = points
        .map((point, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${point.label}</text>`;
        })
        .join('');

      const circles = points
        .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.value)}" r="4" />`)
        .join('');

      chartEl.innerHTML = `
        ${grid}
        <path class="chart-line" d="${path}" />
        ${circles}
        ${xLabels}
      `;
    };

    const renderBarChart = (bars) => {
      wordListEl.hidden = true;
      chartEl.style.display = 'block';
      if (!bars.some((bar) => bar.value !== null)) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">Not enough entries yet for a weekday picture.</text>';
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 44;
      const paddingY = 34;
      const top = 24;
      const maxValue = 10;

      const slot = (width - paddingX * 2) / bars.length;
      const barWidth = slot * 0.6;
      const scaleY = (height - top - paddingY) / maxValue;

      let grid = '';
      for (let value = 0; value <= maxValue; value += 2) {
        const yPos = height - paddingY - value * scaleY;
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${value}</text>`;
      }

      const rects = bars
        .map((bar, index) => {
          if (bar.value === null) {
            return '';
          }
          const barHeight = bar.value * scaleY;
          const xPos = paddingX + index * slot + (slot - barWidth) / 2;
          const yPos = height - paddingY - barHeight;
          return `<rect class="chart-bar" x="${xPos.toFixed(2)}" y="${yPos.toFixed(2)}" width="${barWidth.toFixed(2)}" height="${barHeight.toFixed(2)}" rx="4" />`;
        })
        .join('');

      const labels = bars
        .map((bar, index) => {
          const xPos = paddingX + index * slot + slot / 2;
          return `<text class="chart-label" x="${xPos}" y="${height - paddingY + 18}" text-anchor="middle">${bar.label}</text>`;
        })
        .join('');

      chartEl.innerHTML = `${grid}${rects}${labels}`;
    };

    const renderTopWords = (frequencies) => {
      chartEl.style.display = 'none';
      wordListEl.hidden = false;
      wordListEl.textContent = '';

      const top = frequencies.slice(0, 8);
      if (!top.length) {
        const note = document.createElement('p');
        note.className = 'empty-note';
        note.textContent = 'Write a few entries and your most common words will show up here.';
        wordListEl.appendChild(note);
        return;
      }

      const maxCount = top[0].count;
      top.forEach((item) => {
        const row = document.createElement('div');
        row.className = 'word-row';

        const word = document.createElement('span');
        word.textContent = item.word.charAt(0).toUpperCase() + item.word.slice(1);

        const bar = document.createElement('div');
        bar.className = 'word-bar';
        const fill = document.createElement('span');
        fill.style.width = `${(item.count / maxCount) * 100}%`;
        bar.appendChild(fill);

        const count = document.createElement('span');
        count.textContent = item.count;

        row.append(word, bar, count);
        wordListEl.appendChild(row);
      });
    };

    const renderActiveTab = () => {
      if (!statsData) {
        return;
      }
      if (activeTab === 'weekday') {
        chartTitleEl.textContent = 'Mood by day of the week';
        renderBarChart(
          statsData.mood_by_weekday.map((day) => ({
            label: day.weekday.slice(0, 3),
            value: day.average_mood
          }))
        );
      } else if (activeTab === 'words') {
        chartTitleEl.textContent = 'Most common words';
        renderTopWords(statsData.word_frequencies);
      } else {
        chartTitleEl.textContent = 'Mood trend';
        renderLineChart(
          statsData.mood_trend.map((point) => ({
            label: point.timestamp.slice(5, 10),
            value: point.mood
          })),
          1,
          10
        );
      }
    };

    const setActiveTab = (tab) => {
      activeTab = tab;
      tabs.forEach((button) => {
        const isActive = button.dataset.tab === tab;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      renderActiveTab();
    };

    const loadStats = async () => {
      const res = await fetch('/api/stats');
      if (!res.ok) {
        throw new Error('Unable to load stats');
      }
      statsData = await res.json();
      statTotalEl.textContent = statsData.total_entries;
      statMoodEl.textContent = formatAverage(statsData.average_mood);
      statStreakEl.textContent = statsData.current_streak;
      statWordsEl.textContent = formatAverage(statsData.average_word_count);
      renderActiveTab();
    };

    const renderEntryCard = (entry) => {
      const card = document.createElement('article');
      card.className = 'entry-card';

      const top = document.createElement('div');
      top.className = 'top';
      const date = document.createElement('span');
      date.className = 'date';
      date.textContent = entry.date;
      const mood = document.createElement('span');
      mood.className = 'mood';
      mood.textContent = `${moodEmojis[entry.mood - 1]} ${entry.mood}/10`;
      top.append(date, mood);

      const text = document.createElement('p');
      text.className = 'text';
      text.textContent = entry.text;

      const tags = document.createElement('div');
      tags.className = 'tags';
      tags.textContent = entry.tags.length ? entry.tags.join(', ') : 'No tags';

      card.append(top, text, tags);
      return card;
    };

    const loadJournal = async () => {
      const params = new URLSearchParams({
        mood: moodFilterEl.value,
        sort: sortOrderEl.value
      });
      const res = await fetch(`/api/journal?${params}`);
      if (!res.ok) {
        throw new Error('Unable to load journal');
      }
      const data = await res.json();
      entryListEl.textContent = '';
      journalEmptyEl.hidden = data.entries.length > 0;
      data.entries.forEach((entry) => entryListEl.appendChild(renderEntryCard(entry)));
    };

    const loadAchievements = async () => {
      const res = await fetch('/api/achievements');
      if (!res.ok) {
        throw new Error('Unable to load achievements');
      }
      const data = await res.json();

      badgeListEl.textContent = '';
      badgesEmptyEl.hidden = data.badges.length > 0;
      data.badges.forEach((badgeData) => {
        const card = document.createElement('div');
        card.className = `badge-card ${badgeData.tier}`;
        const name = document.createElement('span');
        name.className = 'name';
        name.textContent = badgeData.name;
        const desc = document.createElement('span');
        desc.className = 'desc';
        desc.textContent = badgeData.description;
        card.append(name, desc);
        badgeListEl.appendChild(card);
      });

      const streakP = data.streak_progress;
      document.getElementById('streak-progress-label').textContent =
        `7-Day Streak: ${streakP.current}/${streakP.target} days`;
      document.getElementById('streak-progress').style.width = `${streakP.fraction * 100}%`;

      const entriesP = data.entries_progress;
      document.getElementById('entries-progress-label').textContent =
        `10 Entries Milestone: ${entriesP.current}/${entriesP.target} entries`;
      document.getElementById('entries-progress').style.width = `${entriesP.fraction * 100}%`;
    };

    const refresh = async () => {
      await Promise.all([loadStats(), loadJournal(), loadAchievements()]);
    };

    const saveEntry = async () => {
      const tags = Array.from(document.querySelectorAll('#tags input:checked')).map(
        (input) => input.value
      );
      setStatus('Saving...', '');
      const res = await fetch('/api/entries', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({
          text: textEl.value,
          mood: Number(moodEl.value),
          tags
        })
      });

      if (!res.ok) {
        const msg = await res.text();
        setStatus(msg || 'Please write something you\'re grateful for!', 'error');
        return;
      }

      textEl.value = '';
      setStatus('Gratitude entry saved! Your future self will thank you. 🎉', 'ok');
      setTimeout(() => setStatus('', ''), 2500);
      refresh().catch((err) => setStatus(err.message, 'error'));
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });
    moodEl.addEventListener('input', updateMoodWidget);
    sortOrderEl.addEventListener('change', () => loadJournal().catch((err) => setStatus(err.message, 'error')));
    moodFilterEl.addEventListener('change', () => loadJournal().catch((err) => setStatus(err.message, 'error')));
    document.getElementById('save-btn').addEventListener('click', () => {
      saveEntry().catch((err) => setStatus(err.message, 'error'));
    });

    updateMoodWidget();
    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
