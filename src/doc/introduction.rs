/*!
# Introductory Tutorial for The Golden

Begin by opening a terminal and running the executable with no arguments.
You get an interactive session where every line you type is a complete
program. Type CTRL-D to exit.
<pre><code>&nbsp;> |3|! \.:
&nbsp;  3.0
</code></pre>

Stop a running program with CTRL-C.

Every line of a program ends with a colon. Anything else on a line is a
command, whitespace, or a comment between double quotes. The command `!`
adds one to the current memory cell and `\.` prints it as a number.
Prefixing a command with a count between bars repeats it.

<pre><code>&nbsp;> "count down" |3|! [ \. ~ ]:
&nbsp;  3.02.01.0
</code></pre>

The memory is made of two tapes that grow in either direction as you
walk along them with `>` and `<`. Only one tape is active at a time,
`^` switches to the other one. Arithmetic commands take their right hand
side from the cell under the cursor of the inactive tape.

<pre><code>&nbsp;> |2|! ^ |5|! + \.:
&nbsp;  7.0
</code></pre>

There are two memories. The global memory belongs to the whole session,
so in the interactive mode it is still there when you run the next line.
The local memory is fresh for every program. Prefix a command with `'`
to make it work on the local memory, and swap the current cells of both
memories with `;`.

<pre><code>&nbsp;> '|9|! ; \.:
&nbsp;  9.0
&nbsp;> \.:
&nbsp;  9.0
</code></pre>

To run a file, pass its directory or its path. Files are always named
`maumivu.au`.

```text
golden path/to/project
golden path/to/project/maumivu.au --debug
golden --code '|72|! \, ! \,:'
```

*/
