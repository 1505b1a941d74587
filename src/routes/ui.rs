use axum::{response::Html, Router, routing::get};

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

async fn index() -> Html<&'static str> {
    Html(r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>AI-Powered Medical Report Analyzer</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 2rem auto; max-width: 860px; color: #1d1d1f; }
    h1 { margin-bottom: 0.5rem; }
    .card { border: 1px solid #ddd; padding: 1rem; border-radius: 8px; margin-bottom: 1rem; }
    label { display: block; margin-top: 0.75rem; font-weight: 600; }
    input, textarea { width: 100%; padding: 0.5rem; box-sizing: border-box; }
    textarea { min-height: 18rem; font-family: inherit; background: #f6f8fa; }
    button { margin-top: 1rem; padding: 0.6rem 1rem; }
  </style>
</head>
<body>
  <h1>AI-Powered Medical Report Analyzer</h1>
  <p>Upload your medical report (PDF or Image), and the AI will analyze it to identify potential issues.</p>

  <form id="uploadForm" class="card">
    <label for="fileInput">Upload Medical Report (PDF/Image)</label>
    <input id="fileInput" name="file" type="file" accept=".pdf,image/*" />
    <button id="submitBtn" type="submit">Submit</button>
  </form>

  <div class="card">
    <label for="output">AI Analysis</label>
    <textarea id="output" readonly></textarea>
  </div>

  <script>
    const form = document.getElementById('uploadForm');
    const submitBtn = document.getElementById('submitBtn');
    const output = document.getElementById('output');

    form.addEventListener('submit', async (event) => {
      event.preventDefault();
      const fileInput = document.getElementById('fileInput');
      if (!fileInput.files.length) {
        output.value = 'Select a file first.';
        return;
      }
      const formData = new FormData();
      formData.append('file', fileInput.files[0]);
      submitBtn.disabled = true;
      output.value = '';
      try {
        const res = await fetch('/api/analyze', { method: 'POST', body: formData });
        const json = await res.json();
        output.value = json.output;
      } catch (err) {
        output.value = 'Error: ' + err;
      } finally {
        submitBtn.disabled = false;
      }
    });
  </script>
</body>
</html>"#)
}
