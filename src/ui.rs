use crate::config::Config;

pub fn render_index(config: &Config) -> String {
    INDEX_HTML
        .replace("{{PAGE_SIZE}}", &config.page_size.to_string())
        .replace("{{SAMPLE_SIZE}}", &config.sample_size.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>飞卢小说数据可视化分析</title>
  <script src="https://cdn.jsdelivr.net/npm/echarts@5.5.0/dist/echarts.min.js"></script>
  <style>
    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --muted: #8b857d;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --danger: #c0392b;
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
      font-family: "PingFang SC", "Microsoft YaHei", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1180px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-size: clamp(1.8rem, 3.5vw, 2.4rem);
      margin: 0;
    }

    .subtitle {
      margin: 6px 0 0;
      color: var(--muted);
    }

    .card {
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 22px;
      box-shadow: var(--shadow);
      padding: 24px;
    }

    .card h2 {
      margin: 0 0 14px;
      font-size: 1.1rem;
      color: var(--accent-2);
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
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
      letter-spacing: 0.08em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .note {
      font-size: 0.75rem;
      color: var(--muted);
    }

    .charts {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(420px, 1fr));
      gap: 24px;
    }

    .chart {
      width: 100%;
      height: 360px;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.92rem;
    }

    th,
    td {
      padding: 10px 8px;
      border-bottom: 1px solid rgba(47, 72, 88, 0.08);
      text-align: left;
    }

    th {
      color: var(--muted);
      font-weight: 500;
    }

    .message {
      text-align: center;
      color: var(--muted);
      padding: 24px 0;
    }

    .message.error {
      color: var(--danger);
    }

    .pagination {
      display: flex;
      gap: 6px;
      justify-content: center;
      margin-top: 16px;
      flex-wrap: wrap;
    }

    .pagination button {
      border: 1px solid rgba(47, 72, 88, 0.2);
      background: white;
      border-radius: 10px;
      padding: 6px 12px;
      cursor: pointer;
      font: inherit;
    }

    .pagination button.active {
      background: var(--accent);
      border-color: var(--accent);
      color: white;
    }

    .pagination button:disabled {
      opacity: 0.4;
      cursor: default;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>飞卢小说数据可视化分析</h1>
      <p class="subtitle">数据来自书库接口，图表与统计在页面加载时生成。</p>
    </header>

    <section class="card">
      <h2>数据概览</h2>
      <div class="panel">
        <div class="stat">
          <span class="label">小说总数</span>
          <span class="value" id="total-books">…</span>
        </div>
        <div class="stat">
          <span class="label">标签总数</span>
          <span class="value" id="total-tags">…</span>
        </div>
        <div class="stat">
          <span class="label">平均评分</span>
          <span class="value" id="avg-rating">…</span>
          <span class="note" id="sample-note">基于前 {{SAMPLE_SIZE}} 本样本</span>
        </div>
        <div class="stat">
          <span class="label">最高月点击</span>
          <span class="value" id="max-clicks">…</span>
        </div>
      </div>
    </section>

    <section class="card">
      <h2>小说列表 <small class="subtitle">每页 {{PAGE_SIZE}} 本</small></h2>
      <table id="books-table">
        <thead>
          <tr>
            <th>ID</th>
            <th>书名</th>
            <th>作者</th>
            <th>月点击</th>
            <th>字数</th>
            <th>鲜花</th>
            <th>评分</th>
            <th>打赏</th>
          </tr>
        </thead>
        <tbody></tbody>
      </table>
      <div class="pagination" id="books-pagination"></div>
    </section>

    <section class="charts">
      <div class="card">
        <h2>标签分布</h2>
        <div class="chart" id="tag-distribution-chart"></div>
      </div>
      <div class="card">
        <h2>评分分布</h2>
        <div class="chart" id="rating-distribution-chart"></div>
      </div>
      <div class="card">
        <h2>热门作者</h2>
        <div class="chart" id="top-authors-chart"></div>
      </div>
      <div class="card">
        <h2>点击量与评分</h2>
        <div class="chart" id="clicks-rating-chart"></div>
      </div>
    </section>
  </main>

  <script>
    const latest = {};
    const charts = {};

    // Each widget remembers this page's newest request; older answers are
    // ignored. The server's `stale` flag covers every client and is not
    // consulted here.
    const load = async (widget, url) => {
      const token = (latest[widget] || 0) + 1;
      latest[widget] = token;
      const res = await fetch(url);
      if (!res.ok) {
        throw new Error(await res.text());
      }
      const payload = await res.json();
      if (latest[widget] !== token) {
        return null;
      }
      return payload;
    };

    const setText = (id, text) => {
      document.getElementById(id).textContent = text;
    };

    const showChartError = (id, message) => {
      const el = document.getElementById(id);
      if (charts[id]) {
        charts[id].dispose();
        delete charts[id];
      }
      el.innerHTML = `<div class="message error">${message}</div>`;
    };

    const drawChart = (id, option) => {
      const el = document.getElementById(id);
      if (!charts[id]) {
        el.innerHTML = '';
        charts[id] = echarts.init(el);
      }
      charts[id].setOption(option, true);
    };

    const loadSummary = async () => {
      const payload = await load('summary', '/dashboard/summary');
      if (!payload) {
        return;
      }
      const pick = (part) => (part.status === 'ready' ? part.data : part.message);
      setText('total-books', pick(payload.total_books));
      setText('total-tags', pick(payload.total_tags));
      if (payload.sample.status === 'ready') {
        setText('avg-rating', payload.sample.data.avg_rating);
        setText('max-clicks', payload.sample.data.max_clicks);
        setText('sample-note', `基于前 ${payload.sample.data.sampled} 本样本`);
      } else {
        setText('avg-rating', payload.sample.message);
        setText('max-clicks', payload.sample.message);
      }
    };

    const escapeHtml = (value) =>
      String(value).replace(/[&<>"']/g, (ch) => ({ '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;' })[ch]);

    const renderPagination = (window) => {
      const el = document.getElementById('books-pagination');
      el.innerHTML = '';
      const add = (label, page, enabled, active) => {
        const button = document.createElement('button');
        button.textContent = label;
        button.disabled = !enabled;
        if (active) {
          button.classList.add('active');
        }
        button.addEventListener('click', () => loadBooks(page));
        el.appendChild(button);
      };
      add('上一页', window.current - 1, window.prev_enabled, false);
      window.pages.forEach((page) => add(String(page), page, true, page === window.current));
      add('下一页', window.current + 1, window.next_enabled, false);
    };

    const loadBooks = async (page) => {
      const body = document.querySelector('#books-table tbody');
      let payload;
      try {
        payload = await load('books', `/dashboard/books?page=${page}`);
      } catch (err) {
        console.error(err);
        body.innerHTML = '<tr><td colspan="8" class="message error">获取数据失败</td></tr>';
        return;
      }
      if (!payload) {
        return;
      }
      if (payload.status !== 'ready') {
        body.innerHTML = `<tr><td colspan="8" class="message error">${payload.message}</td></tr>`;
        return;
      }
      const table = payload.data;
      if (table.empty_message) {
        body.innerHTML = `<tr><td colspan="8" class="message">${table.empty_message}</td></tr>`;
      } else {
        body.innerHTML = table.rows
          .map((row) => `<tr>${[row.id, row.title, row.author, row.monthly_clicks, row.word_count, row.flowers, row.rating, row.rewards]
            .map((cell) => `<td>${escapeHtml(cell)}</td>`)
            .join('')}</tr>`)
          .join('');
      }
      renderPagination(table.pagination);
    };

    const loadChart = async (widget, id, toOption) => {
      const payload = await load(widget, `/dashboard/charts/${widget}`);
      if (!payload) {
        return;
      }
      if (payload.status !== 'ready') {
        showChartError(id, payload.message);
        return;
      }
      drawChart(id, toOption(payload.data));
    };

    const PALETTE = ['#5470c6', '#91cc75', '#fac858', '#ee6666', '#73c0de', '#3ba272', '#fc8452', '#9a60b4'];

    const tagOption = (series) => ({
      tooltip: { trigger: 'axis', axisPointer: { type: 'shadow' } },
      grid: { left: '3%', right: '4%', bottom: '3%', containLabel: true },
      xAxis: { type: 'category', data: series.categories, axisLabel: { interval: 0, rotate: 45 } },
      yAxis: { type: 'value' },
      series: [{
        name: '小说数量',
        type: 'bar',
        data: series.values,
        itemStyle: { color: (params) => PALETTE[params.dataIndex % PALETTE.length] }
      }]
    });

    const ratingOption = (slices) => ({
      tooltip: { trigger: 'item' },
      legend: { orient: 'vertical', left: 'left' },
      series: [{
        name: '小说数量',
        type: 'pie',
        radius: '60%',
        data: slices,
        emphasis: { itemStyle: { shadowBlur: 10, shadowOffsetX: 0, shadowColor: 'rgba(0, 0, 0, 0.5)' } }
      }]
    });

    const authorOption = (series) => ({
      tooltip: { trigger: 'axis', axisPointer: { type: 'shadow' } },
      legend: { data: ['作品数量', '平均评分'] },
      grid: { left: '3%', right: '4%', bottom: '3%', containLabel: true },
      xAxis: [{ type: 'category', data: series.authors, axisLabel: { interval: 0, rotate: 45 } }],
      yAxis: [
        { type: 'value', name: '作品数量', position: 'left' },
        { type: 'value', name: '平均评分', position: 'right', min: 0, max: 10 }
      ],
      series: [
        { name: '作品数量', type: 'bar', data: series.book_counts },
        { name: '平均评分', type: 'line', yAxisIndex: 1, data: series.avg_ratings, symbol: 'circle', symbolSize: 8 }
      ]
    });

    const correlationOption = (points) => ({
      tooltip: {
        trigger: 'item',
        formatter: (params) => `${escapeHtml(params.data[2])}<br/>点击量: ${params.data[0]}<br/>评分: ${params.data[1]}`
      },
      xAxis: { type: 'value', name: '月点击量', nameLocation: 'middle', nameGap: 30, scale: true },
      yAxis: { type: 'value', name: '评分', scale: true },
      series: [{ type: 'scatter', data: points, symbolSize: 10, itemStyle: { color: '#5470c6' } }]
    });

    const CHARTS = [
      ['tags', 'tag-distribution-chart', tagOption, '获取标签分布数据失败'],
      ['ratings', 'rating-distribution-chart', ratingOption, '获取评分分布数据失败'],
      ['authors', 'top-authors-chart', authorOption, '获取热门作者数据失败'],
      ['correlation', 'clicks-rating-chart', correlationOption, '获取点击量与评分关系数据失败']
    ];

    window.addEventListener('resize', () => {
      Object.values(charts).forEach((chart) => chart.resize());
    });

    loadSummary().catch((err) => {
      console.error(err);
      ['total-books', 'total-tags', 'avg-rating', 'max-clicks'].forEach((id) => setText(id, '获取失败'));
    });
    loadBooks(1);
    CHARTS.forEach(([widget, id, toOption, failure]) => {
      loadChart(widget, id, toOption).catch((err) => {
        console.error(err);
        showChartError(id, failure);
      });
    });
  </script>
</body>
</html>
"#;
