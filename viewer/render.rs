/// Self-contained HTML page for the live network view. No frameworks: a
/// canvas, a fetch loop polling `/state`, and the same color encoding the
/// original on-screen drawer used (grayscale nodes by effective value,
/// red-to-green connections by weight through the activation curve).
pub fn page() -> String {
    PAGE.to_owned()
}

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>lattice-nn viewer</title>
<style>
  body { background: #1c1c22; color: #ddd; font-family: monospace; margin: 0; }
  h1 { font-size: 16px; padding: 12px 16px; margin: 0; }
  #meta { padding: 0 16px 8px; color: #888; }
  canvas { display: block; margin: 0 auto; background: #24242c; }
</style>
</head>
<body>
<h1>lattice-nn &mdash; live OR/AND training</h1>
<div id="meta">connecting&hellip;</div>
<canvas id="net" width="1000" height="600"></canvas>
<canvas id="loss" width="1000" height="120"></canvas>
<script>
const netCanvas = document.getElementById('net');
const lossCanvas = document.getElementById('loss');
const meta = document.getElementById('meta');

function fastSigmoid(x) {
  return x / (2 * (1 + Math.abs(x))) + 0.5;
}

function nodeColor(value) {
  const g = Math.round(255 * (value + 1) / 2);
  return `rgb(${g},${g},${g})`;
}

function lineColor(weight) {
  const g = fastSigmoid(weight);
  const minAlpha = 0.1;
  const a = (Math.abs(0.5 - g) + minAlpha) / (0.5 + minAlpha);
  return `rgba(${Math.round(255 * (1 - g))},${Math.round(255 * g)},0,${a})`;
}

function layout(layers, width, height) {
  const margin = 80;
  const tallest = Math.max(...layers.map(l => l.nodes.length), 1);
  const hSpace = layers.length > 1 ? (width - 2 * margin) / (layers.length - 1) : 0;
  const vSpace = tallest > 1 ? (height - 2 * margin) / (tallest - 1) : 0;
  return layers.map((layer, i) => layer.nodes.map((_, j) => ({
    x: margin + i * hSpace,
    y: margin + (j + (tallest - layer.nodes.length) / 2) * vSpace,
  })));
}

function drawNetwork(snap) {
  const ctx = netCanvas.getContext('2d');
  ctx.clearRect(0, 0, netCanvas.width, netCanvas.height);
  const pos = layout(snap.layers, netCanvas.width, netCanvas.height);

  // connections first, nodes on top
  for (let li = 1; li < snap.layers.length; li++) {
    snap.layers[li].nodes.forEach((node, ni) => {
      node.weights.forEach((w, pi) => {
        ctx.strokeStyle = lineColor(w);
        ctx.lineWidth = 2;
        ctx.beginPath();
        ctx.moveTo(pos[li - 1][pi].x, pos[li - 1][pi].y);
        ctx.lineTo(pos[li][ni].x, pos[li][ni].y);
        ctx.stroke();
      });
    });
  }

  const radius = 20;
  snap.layers.forEach((layer, li) => {
    layer.nodes.forEach((node, ni) => {
      const p = pos[li][ni];
      ctx.fillStyle = nodeColor(node.value);
      ctx.beginPath();
      ctx.arc(p.x, p.y, radius, 0, 2 * Math.PI);
      ctx.fill();

      ctx.fillStyle = '#000';
      ctx.textAlign = 'center';
      ctx.font = '12px monospace';
      ctx.fillText(Math.round(node.value * 100), p.x, p.y + 4);
      ctx.fillStyle = '#8af';
      ctx.fillText(Math.round(node.bias * 100), p.x, p.y - radius - 6);
    });
  });
}

function drawLosses(losses) {
  const ctx = lossCanvas.getContext('2d');
  ctx.clearRect(0, 0, lossCanvas.width, lossCanvas.height);
  if (losses.length < 2) return;
  const max = Math.max(...losses, 1e-6);
  ctx.strokeStyle = '#e66';
  ctx.beginPath();
  losses.forEach((l, i) => {
    const x = i * lossCanvas.width / (losses.length - 1);
    const y = lossCanvas.height - 8 - (l / max) * (lossCanvas.height - 16);
    if (i === 0) ctx.moveTo(x, y); else ctx.lineTo(x, y);
  });
  ctx.stroke();
}

async function refresh() {
  try {
    const res = await fetch('/state');
    const state = await res.json();
    meta.textContent = `tick ${state.tick}` +
      (state.losses.length ? ` | loss ${state.losses[state.losses.length - 1].toFixed(4)}` : '');
    drawNetwork(state.network);
    drawLosses(state.losses);
  } catch (e) {
    meta.textContent = 'disconnected: ' + e;
  }
}

setInterval(refresh, 100);
refresh();
</script>
</body>
</html>
"#;
