//! Static artifact templates and the placeholder substitution that fills
//! them. Placeholders are written `{{key}}` with no inner spaces; Vue
//! moustaches in the view templates use inner spaces and pass through
//! untouched.

use laragen_core::LaragenError;
use std::collections::HashMap;

pub fn render_template(
    template: &str,
    context: &HashMap<&str, String>,
) -> Result<String, LaragenError> {
    let mut result = template.to_string();

    for (key, value) in context {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    Ok(result)
}

pub static CONTROLLER_TEMPLATE: &str = r#"<?php

namespace App\Http\Controllers;

use App\Models\{{modelName}};
use Illuminate\Http\Request;
use Inertia\Inertia;

class {{modelName}}Controller extends Controller
{
    public function index()
    {
        ${{modelVariablePlural}} = {{modelName}}::all();

        return Inertia::render('{{modelName}}/Index', [
            '{{modelVariablePlural}}' => ${{modelVariablePlural}},
        ]);
    }

    public function create()
    {
        return Inertia::render('{{modelName}}/Create');
    }

    public function store(Request $request)
    {
        $request->validate([
            {{validationRules}},
        ]);

        {{modelName}}::create([
            {{modelAttributes}},
        ]);

        return redirect()->route('{{routeName}}.index');
    }

    public function show({{modelName}} ${{modelVariable}})
    {
        return Inertia::render('{{modelName}}/Show', [
            '{{modelVariable}}' => ${{modelVariable}},
        ]);
    }

    public function edit({{modelName}} ${{modelVariable}})
    {
        return Inertia::render('{{modelName}}/Edit', [
            '{{modelVariable}}' => ${{modelVariable}},
        ]);
    }

    public function update(Request $request, {{modelName}} ${{modelVariable}})
    {
        $validated = $request->validate([
            {{validationRules}},
        ]);

        ${{modelVariable}}->update($validated);

        return redirect()->route('{{routeName}}.index');
    }

    public function destroy({{modelName}} ${{modelVariable}})
    {
        ${{modelVariable}}->delete();

        return redirect()->route('{{routeName}}.index');
    }
}
"#;

pub static INDEX_VIEW_TEMPLATE: &str = r#"<script setup>
import { Link } from '@inertiajs/vue3';

defineProps({
    {{modelVariablePlural}}: Array,
});
</script>

<template>
    <div>
        <h1>{{modelPlural}}</h1>
        <Link href="/{{routeName}}/create">New {{model}}</Link>
        <ul>
            <li v-for="item in {{modelVariablePlural}}" :key="item.id">
                <Link :href="`/{{routeName}}/${item.id}`">{{model}} #{{ item.id }}</Link>
            </li>
        </ul>
    </div>
</template>
"#;

pub static CREATE_VIEW_TEMPLATE: &str = r#"<script setup>
import { useForm } from '@inertiajs/vue3';

const form = useForm({});

function submit() {
    form.post('/{{routeName}}');
}
</script>

<template>
    <div>
        <h1>Create {{model}}</h1>
        <form @submit.prevent="submit">
            <!-- form fields for {{model}} -->
            <button type="submit" :disabled="form.processing">Save</button>
        </form>
    </div>
</template>
"#;

pub static EDIT_VIEW_TEMPLATE: &str = r#"<script setup>
import { useForm } from '@inertiajs/vue3';

const props = defineProps({
    {{modelVariable}}: Object,
});

const form = useForm({ ...props.{{modelVariable}} });

function submit() {
    form.put(`/{{routeName}}/${props.{{modelVariable}}.id}`);
}
</script>

<template>
    <div>
        <h1>Edit {{model}}</h1>
        <form @submit.prevent="submit">
            <!-- form fields for {{model}} -->
            <button type="submit" :disabled="form.processing">Update</button>
        </form>
    </div>
</template>
"#;

pub static SHOW_VIEW_TEMPLATE: &str = r#"<script setup>
import { Link } from '@inertiajs/vue3';

defineProps({
    {{modelVariable}}: Object,
});
</script>

<template>
    <div>
        <h1>{{model}} #{{ {{modelVariable}}.id }}</h1>
        <pre>{{ JSON.stringify({{modelVariable}}, null, 2) }}</pre>
        <Link href="/{{routeName}}">Back to {{modelPlural}}</Link>
    </div>
</template>
"#;
