pub fn render_index() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Engagement Hub</title>
  <style>
    :root {
      --bg: #12121c;
      --panel: #1d1d2b;
      --ink: #ecebf3;
      --muted: #9a97ad;
      --accent: #e1306c;
      --accent-2: #5b51d8;
      --line: rgba(255, 255, 255, 0.08);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      padding: 24px 16px 48px;
    }

    .app { max-width: 960px; margin: 0 auto; display: grid; gap: 20px; }

    header h1 {
      margin: 0;
      font-size: 1.9rem;
      background: linear-gradient(90deg, var(--accent), var(--accent-2));
      -webkit-background-clip: text;
      background-clip: text;
      color: transparent;
    }

    header p { margin: 4px 0 0; color: var(--muted); }

    nav { display: flex; gap: 8px; flex-wrap: wrap; }

    nav button {
      background: var(--panel);
      color: var(--muted);
      border: 1px solid var(--line);
      border-radius: 10px;
      padding: 8px 16px;
      cursor: pointer;
      font-size: 0.95rem;
    }

    nav button.active { color: var(--ink); border-color: var(--accent); }

    section { display: none; }
    section.active { display: grid; gap: 16px; }

    .card {
      background: var(--panel);
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 18px;
    }

    .card h2 { margin: 0 0 12px; font-size: 1.1rem; }

    .counters { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 12px; }

    .counter { text-align: center; }
    .counter .num { font-size: 2rem; font-weight: 600; color: var(--accent); }
    .counter .label { color: var(--muted); font-size: 0.85rem; }

    input, select {
      background: #15151f;
      color: var(--ink);
      border: 1px solid var(--line);
      border-radius: 8px;
      padding: 8px 10px;
      font-size: 0.95rem;
    }

    form { display: flex; gap: 8px; flex-wrap: wrap; align-items: center; }

    .btn {
      background: var(--accent);
      color: white;
      border: none;
      border-radius: 8px;
      padding: 8px 16px;
      cursor: pointer;
      font-size: 0.95rem;
    }

    .btn.ghost { background: transparent; border: 1px solid var(--line); color: var(--muted); }

    .profile { border-top: 1px solid var(--line); padding: 12px 0; display: grid; gap: 8px; }
    .profile .meta { color: var(--muted); font-size: 0.88rem; }

    .tag {
      display: inline-block;
      background: rgba(91, 81, 216, 0.25);
      border-radius: 999px;
      padding: 2px 10px;
      margin: 0 4px 4px 0;
      font-size: 0.82rem;
    }

    .tag button { background: none; border: none; color: var(--accent); cursor: pointer; }

    table { border-collapse: collapse; width: 100%; }
    th, td { text-align: left; padding: 6px 10px; border-bottom: 1px solid var(--line); }
    th { color: var(--muted); font-weight: 500; }

    .comment-box {
      min-height: 60px;
      border: 1px dashed var(--line);
      border-radius: 10px;
      padding: 12px;
      color: var(--ink);
    }

    ul { margin: 0; padding-left: 20px; color: var(--muted); }
    ul li { margin-bottom: 6px; }

    .tpl { display: flex; justify-content: space-between; gap: 8px; align-items: center; border-top: 1px solid var(--line); padding: 8px 0; }

    .hint { color: var(--muted); font-size: 0.85rem; }
  </style>
</head>
<body>
  <div class="app">
    <header>
      <h1>Engagement Hub</h1>
      <p>Track profiles, log engagements, stay consistent.</p>
    </header>

    <nav>
      <button data-tab="dashboard" class="active">Dashboard</button>
      <button data-tab="profiles">Profiles</button>
      <button data-tab="studio">Comment Studio</button>
      <button data-tab="reminders">Reminders</button>
    </nav>

    <section id="dashboard" class="active">
      <div class="card">
        <h2>This Week</h2>
        <div class="counters">
          <div class="counter"><div class="num" id="profileCount">0</div><div class="label">Tracked profiles</div></div>
          <div class="counter"><div class="num" id="engagementCount">0</div><div class="label">Total engagements</div></div>
          <div class="counter"><div class="num" id="weekCount">0</div><div class="label">This week</div></div>
          <div class="counter"><div class="num" id="highCount">0</div><div class="label">High priority</div></div>
        </div>
      </div>
      <div class="card">
        <h2>Best Times to Engage</h2>
        <table id="bestTimes"></table>
      </div>
      <div class="card">
        <h2>Engagement Tips</h2>
        <ul id="tips"></ul>
      </div>
    </section>

    <section id="profiles">
      <div class="card">
        <h2>Add Profile</h2>
        <form id="addProfileForm">
          <input id="username" placeholder="username" required />
          <select id="niche">
            <option value="street">Street</option>
            <option value="editorial">Editorial</option>
            <option value="commercial">Commercial</option>
          </select>
          <select id="priority">
            <option value="high">High</option>
            <option value="medium" selected>Medium</option>
            <option value="low">Low</option>
          </select>
          <button class="btn" type="submit">Add</button>
        </form>
      </div>
      <div class="card">
        <h2>Log Engagement</h2>
        <form id="logForm">
          <select id="logProfile"></select>
          <select id="logType">
            <option value="like">Like</option>
            <option value="comment">Comment</option>
            <option value="story">Story</option>
            <option value="dm">DM</option>
          </select>
          <input id="logDate" type="date" required />
          <button class="btn" type="submit">Log</button>
        </form>
      </div>
      <div class="card">
        <h2>Tracked Profiles</h2>
        <div id="profileList"></div>
      </div>
    </section>

    <section id="studio">
      <div class="card">
        <h2>Generate Comment</h2>
        <form id="generateForm">
          <select id="genNiche">
            <option value="street">Street</option>
            <option value="editorial">Editorial</option>
            <option value="commercial">Commercial</option>
          </select>
          <button class="btn" type="submit">Generate</button>
          <button class="btn ghost" type="button" id="copyComment">Copy</button>
        </form>
        <p class="comment-box" id="commentText">Pick a niche and generate a comment.</p>
      </div>
      <div class="card">
        <h2>Custom Templates</h2>
        <form id="templateForm">
          <input id="templateInput" placeholder="Write your own template" required style="flex:1" />
          <button class="btn" type="submit">Save</button>
        </form>
        <div id="templateList"></div>
      </div>
    </section>

    <section id="reminders">
      <div class="card">
        <h2>Schedule Reminder</h2>
        <form id="reminderForm">
          <input id="reminderMessage" placeholder="Reminder message" required style="flex:1" />
          <input id="reminderTime" type="datetime-local" required />
          <button class="btn" type="submit">Schedule</button>
        </form>
        <p class="hint" id="reminderHint">Reminders fire while the hub is running; past times are ignored.</p>
      </div>
    </section>
  </div>

  <script>
    const $ = (id) => document.getElementById(id);

    document.querySelectorAll('nav button').forEach((btn) => {
      btn.addEventListener('click', () => {
        document.querySelectorAll('nav button').forEach((b) => b.classList.remove('active'));
        document.querySelectorAll('section').forEach((s) => s.classList.remove('active'));
        btn.classList.add('active');
        $(btn.dataset.tab).classList.add('active');
      });
    });

    async function getJson(url) {
      const resp = await fetch(url);
      if (!resp.ok) throw new Error(await resp.text());
      return resp.json();
    }

    async function send(url, method, body) {
      const resp = await fetch(url, {
        method,
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(body),
      });
      if (!resp.ok) throw new Error(await resp.text());
      return resp.json();
    }

    async function refreshDashboard() {
      const d = await getJson('/api/dashboard');
      $('profileCount').textContent = d.profileCount;
      $('engagementCount').textContent = d.engagementCount;
      $('weekCount').textContent = d.engagementsThisWeek;
      $('highCount').textContent = d.highPriorityCount;
    }

    async function loadStatic() {
      const times = await getJson('/api/best-times');
      $('bestTimes').innerHTML = '<tr><th>Day</th><th>Window</th></tr>' +
        times.map((t) => `<tr><td>${t.day}</td><td>${t.window}</td></tr>`).join('');
      const tips = await getJson('/api/tips');
      $('tips').innerHTML = tips.map((t) => `<li>${t}</li>`).join('');
    }

    function renderProfiles(profiles) {
      $('logProfile').innerHTML = profiles
        .map((p) => `<option value="${p.id}">@${p.username}</option>`)
        .join('');
      if (profiles.length === 0) {
        $('profileList').innerHTML = '<p class="hint">No profiles yet. Add one above.</p>';
        return;
      }
      $('profileList').innerHTML = profiles.map((p) => `
        <div class="profile">
          <div><strong>@${p.username}</strong> <span class="meta">${p.niche} · ${p.priority} priority</span></div>
          <div class="meta">${p.totalEngagements} engagements · last: ${p.lastEngagement ?? 'never'}</div>
          <div>
            ${p.tags.map((t) => `<span class="tag">${t} <button data-act="untag" data-id="${p.id}" data-tag="${t}">×</button></span>`).join('')}
            <input data-tagline="${p.id}" placeholder="tag" size="8" />
            <button class="btn ghost" data-act="tag" data-id="${p.id}">Tag</button>
            <button class="btn ghost" data-act="stats" data-id="${p.id}">Trend</button>
            <button class="btn ghost" data-act="remove" data-id="${p.id}">Remove</button>
          </div>
          <div data-stats="${p.id}"></div>
        </div>`).join('');
    }

    async function refreshProfiles() {
      renderProfiles(await getJson('/api/profiles'));
    }

    $('profileList').addEventListener('click', async (e) => {
      const act = e.target.dataset.act;
      const id = e.target.dataset.id;
      if (!act) return;
      if (act === 'remove') {
        renderProfiles(await send(`/api/profiles/${id}`, 'DELETE'));
      } else if (act === 'tag') {
        const input = document.querySelector(`[data-tagline="${id}"]`);
        if (!input.value.trim()) return;
        renderProfiles(await send(`/api/profiles/${id}/tags`, 'POST', { tag: input.value.trim() }));
      } else if (act === 'untag') {
        renderProfiles(await send(`/api/profiles/${id}/tags`, 'DELETE', { tag: e.target.dataset.tag }));
      } else if (act === 'stats') {
        const s = await getJson(`/api/profiles/${id}/stats`);
        const weeks = Object.keys(s.weeks).sort();
        const box = document.querySelector(`[data-stats="${id}"]`);
        box.innerHTML = weeks.length
          ? '<table><tr><th>Week</th><th>Engagements</th></tr>' +
            weeks.map((w) => `<tr><td>${w}</td><td>${s.weeks[w]}</td></tr>`).join('') + '</table>'
          : '<p class="hint">No data yet.</p>';
      }
      refreshDashboard();
    });

    $('addProfileForm').addEventListener('submit', async (e) => {
      e.preventDefault();
      await send('/api/profiles', 'POST', {
        username: $('username').value,
        niche: $('niche').value,
        priority: $('priority').value,
      });
      $('username').value = '';
      await refreshProfiles();
      await refreshDashboard();
    });

    $('logForm').addEventListener('submit', async (e) => {
      e.preventDefault();
      if (!$('logProfile').value) return;
      await send('/api/engagements', 'POST', {
        profileId: $('logProfile').value,
        date: $('logDate').value,
        engagementType: $('logType').value,
      });
      await refreshProfiles();
      await refreshDashboard();
    });

    $('generateForm').addEventListener('submit', async (e) => {
      e.preventDefault();
      const c = await getJson(`/api/comment?niche=${$('genNiche').value}`);
      $('commentText').textContent = c.comment;
    });

    $('copyComment').addEventListener('click', () => {
      navigator.clipboard.writeText($('commentText').textContent);
    });

    function renderTemplates(templates) {
      $('templateList').innerHTML = templates.length
        ? templates.map((t, i) => `
            <div class="tpl">
              <span>${t}</span>
              <span>
                <button class="btn ghost" data-use="${i}">Use</button>
                <button class="btn ghost" data-del="${i}">Delete</button>
              </span>
            </div>`).join('')
        : '<p class="hint">No custom templates yet.</p>';
    }

    $('templateList').addEventListener('click', async (e) => {
      if (e.target.dataset.use !== undefined) {
        const templates = await getJson('/api/templates');
        $('commentText').textContent = templates[e.target.dataset.use];
      }
      if (e.target.dataset.del !== undefined) {
        renderTemplates(await send(`/api/templates/${e.target.dataset.del}`, 'DELETE'));
      }
    });

    $('templateForm').addEventListener('submit', async (e) => {
      e.preventDefault();
      renderTemplates(await send('/api/templates', 'POST', { template: $('templateInput').value }));
      $('templateInput').value = '';
    });

    $('reminderForm').addEventListener('submit', async (e) => {
      e.preventDefault();
      const r = await send('/api/reminders', 'POST', {
        message: $('reminderMessage').value,
        time: $('reminderTime').value,
      });
      $('reminderHint').textContent = r.scheduled
        ? 'Reminder scheduled.'
        : 'That time already passed; nothing scheduled.';
    });

    loadStatic();
    refreshProfiles();
    refreshDashboard();
    getJson('/api/templates').then(renderTemplates);
  </script>
</body>
</html>
"#;
